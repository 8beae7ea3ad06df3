//! Symlink chain resolution

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::fs::{EntryKind, FsProvider};

/// Upper bound on link hops, matching the usual kernel limit.
pub const MAX_LINK_HOPS: usize = 40;

/// What a symlink chain ends at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Directory(PathBuf),
    File(PathBuf),
    /// Missing target, unreadable link, or a chain longer than [`MAX_LINK_HOPS`].
    Broken,
}

/// A symlink read from a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Raw text of the first hop, as shown after `->`. `None` if it could not be read.
    pub target: Option<PathBuf>,
    pub resolved: Resolved,
}

impl Link {
    pub fn is_dir(&self) -> bool {
        matches!(self.resolved, Resolved::Directory(_))
    }
}

/// Follow the symlink at `path` until a non-link is reached.
pub fn resolve_link<F: FsProvider + ?Sized>(fs: &F, path: &Path) -> Link {
    let target = match fs.read_link(path) {
        Ok(t) => t,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "unreadable symlink");
            return Link {
                target: None,
                resolved: Resolved::Broken,
            };
        }
    };

    let mut current = join_target(path, &target);
    let mut resolved = Resolved::Broken;
    for _ in 0..MAX_LINK_HOPS {
        match fs.entry_kind(&current) {
            Ok(EntryKind::Directory) => {
                resolved = Resolved::Directory(current);
                break;
            }
            Ok(EntryKind::File) => {
                resolved = Resolved::File(current);
                break;
            }
            Ok(EntryKind::Symlink) => match fs.read_link(&current) {
                Ok(next) => current = join_target(&current, &next),
                Err(_) => break,
            },
            Err(_) => break,
        }
    }

    if resolved == Resolved::Broken {
        trace!(path = %path.display(), "symlink does not resolve");
    }

    Link {
        target: Some(target),
        resolved,
    }
}

/// Relative targets are interpreted against the directory holding the link.
fn join_target(link: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        target.to_path_buf()
    } else {
        link.parent()
            .map(|parent| parent.join(target))
            .unwrap_or_else(|| target.to_path_buf())
    }
}
