//! TreeWalker - validates configuration and walks each root argument

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{TreeError, TreeResult};
use crate::fs::{EntryKind, FsProvider, StdFs};

use super::config::WalkerConfig;
use super::counts::Counts;
use super::node::Node;
use super::symlink::resolve_link;
use super::traversal::Traversal;
use super::visitor::{TreeOutput, TreeVisitor};

/// Entry point for rendering one or more roots into a [`TreeOutput`].
pub struct TreeWalker<F: FsProvider = StdFs> {
    config: WalkerConfig,
    fs: F,
}

impl TreeWalker<StdFs> {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config, fs: StdFs }
    }
}

impl<F: FsProvider> TreeWalker<F> {
    pub fn with_provider(config: WalkerConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk every root in order and stream the result to `output`.
    ///
    /// Fails before producing any output if the configuration is invalid.
    /// Roots that are missing or not directories are reported through
    /// [`TreeOutput::root_error`] and skipped. Counts are shared across roots.
    pub fn walk_streaming<P, O>(&self, roots: &[P], output: &mut O) -> TreeResult<Counts>
    where
        P: AsRef<Path>,
        O: TreeOutput + ?Sized,
    {
        self.config.validate()?;

        let mut total = Counts::default();
        for root in roots {
            let root = root.as_ref();
            let label = root.display().to_string();

            if let Err(e) = self.open_root(root) {
                debug!(error = ?e, "skipping root");
                output.root_error(&label)?;
                continue;
            }

            output.start_root(&label)?;
            total += self.walk_root(root, &label, output)?;
            output.end_root()?;
        }

        output.finish(total)?;
        Ok(total)
    }

    /// Walk a single root without the summary line.
    pub fn walk_root<O: TreeOutput + ?Sized>(
        &self,
        root: &Path,
        label: &str,
        output: &mut O,
    ) -> TreeResult<Counts> {
        // Fresh session per root: cycles are path-local.
        let mut traversal = Traversal::new(&self.config, &self.fs);
        let mut visitor = TreeVisitor::new(&self.config, output);
        Ok(traversal.walk_root(&Node::root(root, label), &mut visitor)?)
    }

    /// Check that `path` is (or links to) a directory.
    fn open_root(&self, path: &Path) -> TreeResult<()> {
        let is_dir = match self.fs.entry_kind(path) {
            Ok(EntryKind::Directory) => true,
            Ok(EntryKind::Symlink) => resolve_link(&self.fs, path).is_dir(),
            Ok(EntryKind::File) => false,
            Err(e) => return Err(TreeError::unreadable_root(path, e)),
        };
        if is_dir {
            Ok(())
        } else {
            Err(TreeError::unreadable_root(
                path,
                io::Error::other("not a directory"),
            ))
        }
    }
}
