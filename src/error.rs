//! Error types for tree rendering

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by configuration checks, root handling and output sinks.
///
/// Filesystem failures below a root never escape the walker; they are
/// contained to the smallest affected subtree. Only [`TreeError::InvalidConfiguration`]
/// and [`TreeError::Output`] abort a run.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("{reason}")]
    InvalidConfiguration { reason: String },

    #[error("{} [error opening dir]", .path.display())]
    UnreadableRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn unreadable_root(path: &Path, source: io::Error) -> Self {
        Self::UnreadableRoot {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path tied to a filesystem failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeError::UnreadableRoot { path, .. } | TreeError::ReadDir { path, .. } => Some(path),
            TreeError::InvalidConfiguration { .. } | TreeError::Output(_) => None,
        }
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
