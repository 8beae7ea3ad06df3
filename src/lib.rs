//! boxtree - render a directory hierarchy as an indented tree diagram

pub mod error;
pub mod fs;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{TreeError, TreeResult};
pub use fs::{EntryKind, FileId, FsProvider, StdFs};
pub use output::{ColorMode, JsonFormatter, OutputConfig, StreamingFormatter};
pub use tree::{Counts, Node, NodeKind, TreeOutput, TreeWalker, Visit, Visitor, WalkerConfig};
