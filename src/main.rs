//! CLI entry point for tree

use std::io;
use std::path::PathBuf;
use std::process;

use boxtree::tree::parse_level;
use boxtree::{
    ColorMode, JsonFormatter, OutputConfig, StreamingFormatter, TreeError, TreeOutput, TreeWalker,
    WalkerConfig,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `TREE_LOG=debug`).
const LOG_ENV: &str = "TREE_LOG";

#[derive(Parser, Debug)]
#[command(name = "tree")]
#[command(about = "List the contents of directories in a tree-like format")]
#[command(version)]
struct Args {
    /// Directories to display
    #[arg(default_value = ".")]
    dirs: Vec<PathBuf>,

    /// All files are listed, including hidden ones
    #[arg(short = 'a')]
    all: bool,

    /// List directories only
    #[arg(short = 'd')]
    dirs_only: bool,

    /// Follow symbolic links like directories
    #[arg(short = 'l')]
    follow: bool,

    /// Descend only LEVEL directories deep
    #[arg(short = 'L', value_name = "LEVEL", allow_hyphen_values = true)]
    level: Option<String>,

    /// Do not list files matching the pattern (can be used multiple times)
    #[arg(short = 'I', value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Output the tree as JSON
    #[arg(short = 'J', long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn build_config(args: &Args) -> Result<WalkerConfig, TreeError> {
    let max_depth = args.level.as_deref().map(parse_level).transpose()?;
    let config = WalkerConfig {
        show_hidden: args.all,
        dirs_only: args.dirs_only,
        follow_symlinks: args.follow,
        max_depth,
        ignore_patterns: args.ignore.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // Bad options are reported without a tree, but are not a crash.
            println!("tree: {}.", e);
            return;
        }
    };

    let walker = TreeWalker::new(config);
    let mut output: Box<dyn TreeOutput> = if args.json {
        Box::new(JsonFormatter::new())
    } else {
        Box::new(StreamingFormatter::new(OutputConfig {
            use_color: args.color.should_use_color(),
        }))
    };

    if let Err(e) = walker.walk_streaming(&args.dirs, output.as_mut()) {
        eprintln!("tree: {}", e);
        process::exit(1);
    }
}
