//! Traversal nodes and branch-prefix calculation

use std::path::{Path, PathBuf};

pub const TEE: &str = "├── ";
pub const ELBOW: &str = "└── ";
pub const PIPE: &str = "│   ";
pub const BLANK: &str = "    ";

/// One filesystem entry's traversal state.
///
/// Nodes are built by the walker as soon as a child name is read from its
/// parent's listing and are never mutated afterwards.
///
/// `ancestor_trail` holds one fragment per level down to and including this
/// node, so its length always equals `depth`. The last fragment is the one
/// this node hands down to its own children; the line for the node itself is
/// drawn from the fragments before it plus `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub depth: usize,
    pub name: String,
    pub path: PathBuf,
    pub prefix: &'static str,
    pub ancestor_trail: Vec<&'static str>,
    pub has_following_sibling: bool,
}

impl Node {
    /// Root of a traversal: depth 0, no prefix, no trail.
    pub fn root(path: &Path, label: &str) -> Self {
        Self {
            depth: 0,
            name: label.to_string(),
            path: path.to_path_buf(),
            prefix: "",
            ancestor_trail: Vec::new(),
            has_following_sibling: false,
        }
    }

    /// Build the node for child `index` of `last_index + 1` siblings.
    pub fn child(&self, index: usize, last_index: usize, name: &str) -> Self {
        let (prefix, fragment) = child_prefix(index, last_index);
        let mut ancestor_trail = Vec::with_capacity(self.ancestor_trail.len() + 1);
        ancestor_trail.extend_from_slice(&self.ancestor_trail);
        ancestor_trail.push(fragment);

        Self {
            depth: self.depth + 1,
            name: name.to_string(),
            path: self.path.join(name),
            prefix,
            ancestor_trail,
            has_following_sibling: index != last_index,
        }
    }

    /// Same node, but queried through `path` (used when following a link).
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Connector text printed before the name: inherited fragments plus the branch glyph.
    pub fn indent(&self) -> String {
        let inherited = self.depth.saturating_sub(1);
        let mut line: String = self.ancestor_trail[..inherited].concat();
        line.push_str(self.prefix);
        line
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

/// Branch glyph and inherited fragment for a child at `index`.
pub fn child_prefix(index: usize, last_index: usize) -> (&'static str, &'static str) {
    if index != last_index {
        (TEE, PIPE)
    } else {
        (ELBOW, BLANK)
    }
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node_is_bare() {
        let root = Node::root(Path::new("/tmp/x"), ".");
        assert_eq!(root.depth, 0);
        assert!(root.ancestor_trail.is_empty());
        assert_eq!(root.prefix, "");
        assert_eq!(root.indent(), "");
    }

    #[test]
    fn test_child_prefix_glyphs() {
        assert_eq!(child_prefix(0, 2), (TEE, PIPE));
        assert_eq!(child_prefix(1, 2), (TEE, PIPE));
        assert_eq!(child_prefix(2, 2), (ELBOW, BLANK));
        assert_eq!(child_prefix(0, 0), (ELBOW, BLANK));
    }

    #[test]
    fn test_trail_length_tracks_depth() {
        let root = Node::root(Path::new("r"), ".");
        let a = root.child(0, 1, "a");
        let b = a.child(1, 1, "b");
        let c = b.child(0, 0, "c");

        for node in [&a, &b, &c] {
            assert_eq!(node.ancestor_trail.len(), node.depth);
        }
        assert_eq!(c.path, Path::new("r").join("a").join("b").join("c"));
    }

    #[test]
    fn test_indent_uses_ancestor_fragments() {
        let root = Node::root(Path::new("r"), ".");
        let a = root.child(0, 1, "a");
        let z = root.child(1, 1, "z");
        let a_last = a.child(1, 1, "inner");
        let z_first = z.child(0, 1, "inner");

        assert_eq!(a.indent(), "├── ");
        assert_eq!(z.indent(), "└── ");
        assert_eq!(a_last.indent(), "│   └── ");
        assert_eq!(z_first.indent(), "    ├── ");
        assert!(a.has_following_sibling);
        assert!(!z.has_following_sibling);
    }

    #[test]
    fn test_prefix_is_pure() {
        let root = Node::root(Path::new("r"), ".");
        assert_eq!(root.child(3, 5, "n"), root.child(3, 5, "n"));
    }

    #[test]
    fn test_hidden_names() {
        assert!(is_hidden_name(".git"));
        assert!(is_hidden_name("."));
        assert!(!is_hidden_name("a.txt"));
    }
}
