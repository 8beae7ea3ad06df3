//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as the walker produces it, for use with `TreeWalker`.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Counts, Node, NodeKind, Resolved, TreeOutput};

use super::config::OutputConfig;

pub const RECURSIVE_MARKER: &str = "  [recursive, not followed]";
pub const ROOT_ERROR_MARKER: &str = " [error opening dir]";

/// Streaming output formatter - writes directly to a color-capable writer.
pub struct StreamingFormatter<W: WriteColor = StandardStream> {
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

fn dir_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn start_root(&mut self, label: &str) -> io::Result<()> {
        self.write_colored(label, &dir_spec())?;
        writeln!(self.out)
    }

    fn root_error(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", label, ROOT_ERROR_MARKER)
    }

    fn output_node(&mut self, node: &Node, kind: &NodeKind) -> io::Result<()> {
        write!(self.out, "{}", node.indent())?;

        match kind {
            NodeKind::Directory => self.write_colored(&node.name, &dir_spec())?,
            NodeKind::File => write!(self.out, "{}", node.name)?,
            NodeKind::Symlink { link, recursive } => {
                self.write_colored(&node.name, &fg(Color::Magenta))?;
                if let Some(target) = &link.target {
                    write!(self.out, " -> ")?;
                    let target = target.display().to_string();
                    match link.resolved {
                        Resolved::Directory(_) => self.write_colored(&target, &dir_spec())?,
                        Resolved::File(_) => write!(self.out, "{}", target)?,
                        Resolved::Broken => self.write_colored(&target, &fg(Color::Red))?,
                    }
                }
                if *recursive {
                    write!(self.out, "{}", RECURSIVE_MARKER)?;
                }
            }
        }

        writeln!(self.out)
    }

    fn finish(&mut self, counts: Counts) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", counts.summary())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use termcolor::{Ansi, NoColor};

    use crate::tree::Link;

    fn render(f: impl FnOnce(&mut StreamingFormatter<NoColor<Vec<u8>>>)) -> String {
        let mut formatter = StreamingFormatter::with_writer(NoColor::new(Vec::new()));
        f(&mut formatter);
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    fn link(target: &str, resolved: Resolved, recursive: bool) -> NodeKind {
        NodeKind::Symlink {
            link: Link {
                target: Some(PathBuf::from(target)),
                resolved,
            },
            recursive,
        }
    }

    #[test]
    fn test_scenario_lines() {
        let root = Node::root(Path::new("r"), ".");
        let text = render(|f| {
            f.start_root(".").unwrap();
            f.output_node(&root.child(0, 1, "a"), &NodeKind::Directory)
                .unwrap();
            f.output_node(&root.child(1, 1, "b.txt"), &NodeKind::File)
                .unwrap();
            f.finish(Counts::new(1, 1)).unwrap();
        });
        assert_eq!(text, ".\n├── a\n└── b.txt\n\n1 directories, 1 files\n");
    }

    #[test]
    fn test_symlink_rendering() {
        let root = Node::root(Path::new("r"), ".");
        let text = render(|f| {
            f.output_node(
                &root.child(0, 2, "to_dir"),
                &link("real", Resolved::Directory(PathBuf::from("r/real")), false),
            )
            .unwrap();
            f.output_node(
                &root.child(1, 2, "to_file"),
                &link("f.txt", Resolved::File(PathBuf::from("r/f.txt")), false),
            )
            .unwrap();
            f.output_node(
                &root.child(2, 2, "y"),
                &link(".", Resolved::Directory(PathBuf::from("r")), true),
            )
            .unwrap();
        });
        assert_eq!(
            text,
            "├── to_dir -> real\n├── to_file -> f.txt\n└── y -> .  [recursive, not followed]\n"
        );
    }

    #[test]
    fn test_root_error_line() {
        let text = render(|f| f.root_error("nope").unwrap());
        assert_eq!(text, "nope [error opening dir]\n");
    }

    #[test]
    fn test_directories_are_colored() {
        let root = Node::root(Path::new("r"), ".");
        let mut formatter = StreamingFormatter::with_writer(Ansi::new(Vec::new()));
        formatter
            .output_node(&root.child(0, 0, "src"), &NodeKind::Directory)
            .unwrap();
        let text = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert!(text.starts_with("└── \x1b["));
        assert!(text.contains("src"));
    }
}
