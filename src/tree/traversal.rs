//! Recursive traversal engine.
//!
//! A [`Traversal`] is a short-lived session for one root: it owns the running
//! [`Counts`] and the set of directory identities open on the current path.
//! Nodes are handed to a [`Visitor`] in listing order and a subtree is fully
//! visited and counted before its next sibling starts.

use std::collections::HashSet;
use std::io;

use tracing::{debug, trace};

use crate::fs::{EntryKind, FileId, FsProvider};

use super::config::WalkerConfig;
use super::counts::Counts;
use super::listing::list_children;
use super::node::Node;
use super::symlink::resolve_link;
use super::visitor::{NodeKind, Visit, Visitor};

pub struct Traversal<'a, F: FsProvider + ?Sized> {
    config: &'a WalkerConfig,
    fs: &'a F,
    /// Identities of directories open on the current path. Only tracked when
    /// following symlinks, since plain directories cannot form cycles.
    visited: HashSet<FileId>,
    counts: Counts,
}

impl<'a, F: FsProvider + ?Sized> Traversal<'a, F> {
    pub fn new(config: &'a WalkerConfig, fs: &'a F) -> Self {
        Self {
            config,
            fs,
            visited: HashSet::new(),
            counts: Counts::default(),
        }
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// Walk everything beneath `root`. The root itself is neither visited nor counted.
    pub fn walk_root<V: Visitor + ?Sized>(&mut self, root: &Node, visitor: &mut V) -> io::Result<Counts> {
        self.descend(root, visitor)?;
        Ok(self.counts)
    }

    /// Visit `node`, then its subtree, and count it.
    pub fn walk<V: Visitor + ?Sized>(&mut self, node: Node, visitor: &mut V) -> io::Result<()> {
        match self.fs.entry_kind(&node.path) {
            Ok(kind) => self.walk_entry(node, kind, visitor),
            Err(e) => {
                debug!(path = %node.path.display(), error = %e, "cannot classify entry");
                Ok(())
            }
        }
    }

    fn walk_entry<V: Visitor + ?Sized>(
        &mut self,
        node: Node,
        entry: EntryKind,
        visitor: &mut V,
    ) -> io::Result<()> {
        if self.config.beyond_max_depth(node.depth) {
            return Ok(());
        }

        let kind = self.classify(&node, entry);
        if visitor.visit(&node, &kind)? == Visit::Stop {
            return Ok(());
        }

        if kind.descends(self.config) {
            self.descend(&node, visitor)?;
        }

        if kind.is_dir() {
            self.counts.directories += 1;
        } else {
            self.counts.files += 1;
        }
        Ok(())
    }

    fn classify(&self, node: &Node, entry: EntryKind) -> NodeKind {
        match entry {
            EntryKind::Directory => NodeKind::Directory,
            EntryKind::File => NodeKind::File,
            EntryKind::Symlink => {
                let link = resolve_link(self.fs, &node.path);
                let recursive = self.config.follow_symlinks
                    && link.is_dir()
                    && match self.fs.file_id(&node.path) {
                        Ok(id) => self.visited.contains(&id),
                        Err(e) => {
                            // No identity means no cycle guard, so never follow it.
                            debug!(path = %node.path.display(), error = %e, "cannot identify link target");
                            true
                        }
                    };
                NodeKind::Symlink { link, recursive }
            }
        }
    }

    /// List and walk the children of `node`, tracking it as an open directory.
    fn descend<V: Visitor + ?Sized>(&mut self, node: &Node, visitor: &mut V) -> io::Result<()> {
        let entered = if self.config.follow_symlinks {
            self.enter(node)
        } else {
            None
        };

        let result = self.walk_children(node, visitor);

        if let Some(id) = entered {
            self.visited.remove(&id);
        }
        result
    }

    fn enter(&mut self, node: &Node) -> Option<FileId> {
        match self.fs.file_id(&node.path) {
            Ok(id) => self.visited.insert(id.clone()).then_some(id),
            Err(e) => {
                debug!(path = %node.path.display(), error = %e, "cannot identify directory");
                None
            }
        }
    }

    fn walk_children<V: Visitor + ?Sized>(&mut self, node: &Node, visitor: &mut V) -> io::Result<()> {
        if self.config.beyond_max_depth(node.depth + 1) {
            return Ok(());
        }

        let children = match list_children(self.fs, &node.path, self.config) {
            Ok(children) => children,
            Err(e) => {
                debug!(error = %e, "skipping unreadable directory");
                return Ok(());
            }
        };
        trace!(path = %node.path.display(), count = children.len(), "listed directory");

        let Some(last_index) = children.len().checked_sub(1) else {
            return Ok(());
        };
        for (index, child) in children.into_iter().enumerate() {
            let next = node.child(index, last_index, &child.name).with_path(child.path);
            self.walk_entry(next, child.kind, visitor)?;
        }
        Ok(())
    }
}
