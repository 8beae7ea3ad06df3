//! Directory tree walking logic
//!
//! The walker lists each directory through an [`FsProvider`](crate::fs::FsProvider),
//! builds a [`Node`] per surviving child, and hands it to a [`Visitor`].
//! [`TreeWalker`] wraps this for callers that just want to stream one or
//! more roots into a [`TreeOutput`].

mod config;
mod counts;
mod listing;
mod node;
mod symlink;
mod traversal;
mod visitor;
mod walker;

// Re-export public types
pub use config::{WalkerConfig, parse_level};
pub use counts::Counts;
pub use listing::{Child, glob_match, list_children, should_ignore_name};
pub use node::{BLANK, ELBOW, Node, PIPE, TEE, child_prefix, is_hidden_name};
pub use symlink::{Link, MAX_LINK_HOPS, Resolved, resolve_link};
pub use traversal::Traversal;
pub use visitor::{NodeKind, TreeOutput, TreeVisitor, Visit, Visitor};
pub use walker::TreeWalker;
