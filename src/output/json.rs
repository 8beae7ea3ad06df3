//! JSON output formatting
//!
//! The walker streams nodes in display order; `JsonFormatter` rebuilds the
//! nesting from node depths and prints a single array once the walk finishes.

use std::io::{self, Write};

use serde::Serialize;

use crate::tree::{Counts, Node, NodeKind, TreeOutput};

/// One element of the JSON output array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonEntry {
    Directory {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        contents: Option<Vec<JsonEntry>>,
    },
    File {
        name: String,
    },
    Link {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        broken: bool,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        recursive: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        contents: Option<Vec<JsonEntry>>,
    },
    Report {
        directories: u64,
        files: u64,
    },
}

impl JsonEntry {
    fn contents_mut(&mut self) -> Option<&mut Vec<JsonEntry>> {
        match self {
            JsonEntry::Directory { contents, .. } | JsonEntry::Link { contents, .. } => {
                contents.as_mut()
            }
            _ => None,
        }
    }
}

/// Buffers the whole walk and writes pretty-printed JSON on `finish`.
pub struct JsonFormatter<W: Write = io::Stdout> {
    out: W,
    /// Open directories; index equals depth below the current root.
    stack: Vec<JsonEntry>,
    entries: Vec<JsonEntry>,
}

impl JsonFormatter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for JsonFormatter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            stack: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Close open directories until the top of the stack sits at `depth`.
    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            let Some(mut done) = self.stack.pop() else { break };
            // A link that was never descended into is a leaf.
            if let JsonEntry::Link { contents, .. } = &mut done {
                if contents.as_ref().is_some_and(Vec::is_empty) {
                    *contents = None;
                }
            }
            self.push_entry(done);
        }
    }

    fn push_entry(&mut self, entry: JsonEntry) {
        match self.stack.last_mut().and_then(JsonEntry::contents_mut) {
            Some(contents) => contents.push(entry),
            None => self.entries.push(entry),
        }
    }
}

impl<W: Write> TreeOutput for JsonFormatter<W> {
    fn start_root(&mut self, label: &str) -> io::Result<()> {
        self.close_to(0);
        self.stack.push(JsonEntry::Directory {
            name: label.to_string(),
            error: None,
            contents: Some(Vec::new()),
        });
        Ok(())
    }

    fn root_error(&mut self, label: &str) -> io::Result<()> {
        self.close_to(0);
        self.entries.push(JsonEntry::Directory {
            name: label.to_string(),
            error: Some("error opening dir".to_string()),
            contents: None,
        });
        Ok(())
    }

    fn output_node(&mut self, node: &Node, kind: &NodeKind) -> io::Result<()> {
        // Parent of a node at `depth` lives at stack index `depth - 1`.
        self.close_to(node.depth);

        let name = node.name.clone();
        let entry = match kind {
            NodeKind::Directory => JsonEntry::Directory {
                name,
                error: None,
                contents: Some(Vec::new()),
            },
            NodeKind::File => JsonEntry::File { name },
            NodeKind::Symlink { link, recursive } => JsonEntry::Link {
                name,
                target: link.target.as_ref().map(|t| t.display().to_string()),
                broken: kind.is_broken_link(),
                recursive: *recursive,
                contents: (link.is_dir() && !recursive).then(Vec::new),
            },
        };

        if entry_is_open(&entry) {
            self.stack.push(entry);
        } else {
            self.push_entry(entry);
        }
        Ok(())
    }

    fn end_root(&mut self) -> io::Result<()> {
        self.close_to(0);
        Ok(())
    }

    fn finish(&mut self, counts: Counts) -> io::Result<()> {
        self.close_to(0);
        self.entries.push(JsonEntry::Report {
            directories: counts.directories,
            files: counts.files,
        });
        serde_json::to_writer_pretty(&mut self.out, &self.entries).map_err(io::Error::other)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

fn entry_is_open(entry: &JsonEntry) -> bool {
    matches!(
        entry,
        JsonEntry::Directory {
            contents: Some(_),
            ..
        } | JsonEntry::Link {
            contents: Some(_),
            ..
        }
    )
}
