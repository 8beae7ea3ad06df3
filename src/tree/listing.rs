//! Child enumeration and listing filters

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::trace;

use crate::error::{TreeError, TreeResult};
use crate::fs::{EntryKind, FsProvider};

use super::config::WalkerConfig;
use super::node::is_hidden_name;
use super::symlink::resolve_link;

/// A directory entry that survived the listing filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Read, filter, and order the children of `path`.
///
/// Filters run before any prefix is computed, so excluded entries never
/// affect which sibling is drawn last. Entries that disappear between the
/// listing and the type lookup are dropped.
pub fn list_children<F: FsProvider + ?Sized>(
    fs: &F,
    path: &Path,
    config: &WalkerConfig,
) -> TreeResult<Vec<Child>> {
    let names = fs
        .read_dir(path)
        .map_err(|e| TreeError::read_dir(path, e))?;

    let mut children = Vec::with_capacity(names.len());
    for raw in names {
        let name = raw.to_string_lossy().to_string();

        if !config.show_hidden && is_hidden_name(&name) {
            continue;
        }
        if should_ignore_name(&name, &config.ignore_patterns) {
            continue;
        }

        let child_path = path.join(&raw);
        let kind = match fs.entry_kind(&child_path) {
            Ok(kind) => kind,
            Err(e) => {
                trace!(path = %child_path.display(), error = %e, "entry vanished during listing");
                continue;
            }
        };

        if config.dirs_only && !is_directory_like(fs, &child_path, kind) {
            continue;
        }

        children.push(Child {
            name,
            path: child_path,
            kind,
        });
    }

    Ok(children)
}

fn is_directory_like<F: FsProvider + ?Sized>(fs: &F, path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::Directory => true,
        EntryKind::Symlink => resolve_link(fs, path).is_dir(),
        EntryKind::File => false,
    }
}

/// Check a name against ignore patterns (exact name or glob).
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
