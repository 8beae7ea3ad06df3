//! Configuration types for tree walking

use crate::error::{TreeError, TreeResult};

const INVALID_LEVEL: &str = "invalid level, must be greater than 0";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include dot-prefixed entries
    pub show_hidden: bool,
    pub dirs_only: bool,
    /// Descend into symlinks that resolve to directories
    pub follow_symlinks: bool,
    /// Deepest level shown, root children are level 1. `None` is unlimited.
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
}

impl WalkerConfig {
    /// Check the configuration before any traversal starts.
    pub fn validate(&self) -> TreeResult<()> {
        if self.max_depth == Some(0) {
            return Err(TreeError::invalid(INVALID_LEVEL));
        }
        for pattern in &self.ignore_patterns {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(TreeError::invalid(format!(
                    "invalid pattern '{}': {}",
                    pattern, e.msg
                )));
            }
        }
        Ok(())
    }

    /// True when nodes at `depth` would be cut off by the depth limit.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

/// Parse a `-L` argument into a depth limit.
///
/// Accepts only positive integers; zero, negatives and non-numbers are
/// rejected with the same reason.
pub fn parse_level(s: &str) -> TreeResult<usize> {
    match s.trim().parse::<i64>() {
        Ok(level) if level > 0 => {
            usize::try_from(level).map_err(|_| TreeError::invalid(INVALID_LEVEL))
        }
        _ => Err(TreeError::invalid(INVALID_LEVEL)),
    }
}
