//! Filesystem provider used by the walker
//!
//! The walker never touches `std::fs` directly. Everything it needs to know
//! about an entry goes through [`FsProvider`], which keeps the traversal
//! logic independent of how metadata is actually fetched.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Entry type as reported without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Regular files and anything else that is neither a directory nor a link
    /// (fifos, sockets, devices).
    File,
    Symlink,
}

/// Stable per-file identity used for cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileId {
    Inode { dev: u64, ino: u64 },
    /// Fallback for platforms without inode numbers. Two hard-linked paths
    /// compare unequal here, so this is a weaker guarantee.
    Canonical(PathBuf),
}

pub trait FsProvider {
    /// Classify `path` without following a trailing symlink.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Names of the entries in `path`, in the order they should be displayed.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Raw target text of the symlink at `path`.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Identity of the file `path` ultimately refers to (symlinks followed).
    fn file_id(&self, path: &Path) -> io::Result<FileId>;
}

/// Provider backed by `std::fs`. Listings are sorted by raw file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl FsProvider for StdFs {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let file_type = std::fs::symlink_metadata(path)?.file_type();
        Ok(if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    #[cfg(unix)]
    fn file_id(&self, path: &Path) -> io::Result<FileId> {
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::metadata(path)?;
        Ok(FileId::Inode {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    #[cfg(not(unix))]
    fn file_id(&self, path: &Path) -> io::Result<FileId> {
        std::fs::canonicalize(path).map(FileId::Canonical)
    }
}
