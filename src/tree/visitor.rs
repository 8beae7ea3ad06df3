//! Node classification, the visitor seam, and the output sink trait

use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::counts::Counts;
use super::node::Node;
use super::symlink::{Link, Resolved};

/// A node after the walker has looked it up through the filesystem provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
    Symlink {
        link: Link,
        /// The link resolves to a directory already open on the current path.
        recursive: bool,
    },
}

impl NodeKind {
    /// Whether this node is counted as a directory.
    pub fn is_dir(&self) -> bool {
        match self {
            NodeKind::Directory => true,
            NodeKind::File => false,
            NodeKind::Symlink { link, .. } => link.is_dir(),
        }
    }

    pub fn is_symlink(&self) -> bool {
        matches!(self, NodeKind::Symlink { .. })
    }

    pub fn is_broken_link(&self) -> bool {
        matches!(
            self,
            NodeKind::Symlink {
                link: Link {
                    resolved: Resolved::Broken,
                    ..
                },
                ..
            }
        )
    }

    /// Whether the walker will list children beneath this node.
    pub fn descends(&self, config: &WalkerConfig) -> bool {
        match self {
            NodeKind::Directory => true,
            NodeKind::File => false,
            NodeKind::Symlink { link, recursive } => {
                config.follow_symlinks && link.is_dir() && !recursive
            }
        }
    }

    /// Raw link text shown after the arrow.
    pub fn link_target(&self) -> Option<&Path> {
        match self {
            NodeKind::Symlink { link, .. } => link.target.as_deref(),
            _ => None,
        }
    }
}

/// Continuation signal returned by a [`Visitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Continue,
    /// Skip this node and everything beneath it; nothing is counted.
    Stop,
}

/// Receives every classified node in display order.
pub trait Visitor {
    fn visit(&mut self, node: &Node, kind: &NodeKind) -> io::Result<Visit>;
}

/// Sink for rendered tree content.
pub trait TreeOutput {
    /// First line of a traversal: the root label.
    fn start_root(&mut self, label: &str) -> io::Result<()>;

    /// A root argument that is missing or not a directory.
    fn root_error(&mut self, label: &str) -> io::Result<()>;

    fn output_node(&mut self, node: &Node, kind: &NodeKind) -> io::Result<()>;

    fn end_root(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, counts: Counts) -> io::Result<()>;
}

/// Visitor that applies the hidden-file rule and forwards nodes to a [`TreeOutput`].
pub struct TreeVisitor<'a, O: TreeOutput + ?Sized> {
    show_hidden: bool,
    output: &'a mut O,
}

impl<'a, O: TreeOutput + ?Sized> TreeVisitor<'a, O> {
    pub fn new(config: &WalkerConfig, output: &'a mut O) -> Self {
        Self {
            show_hidden: config.show_hidden,
            output,
        }
    }
}

impl<O: TreeOutput + ?Sized> Visitor for TreeVisitor<'_, O> {
    fn visit(&mut self, node: &Node, kind: &NodeKind) -> io::Result<Visit> {
        if !self.show_hidden && node.is_hidden() {
            return Ok(Visit::Stop);
        }
        self.output.output_node(node, kind)?;
        Ok(Visit::Continue)
    }
}
