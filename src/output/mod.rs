//! Tree formatting and display
//!
//! - `streaming` - colored console output, one line per node
//! - `json` - nested JSON document written when the walk finishes

mod config;
mod json;
mod streaming;

pub use config::{ColorMode, OutputConfig};
pub use json::{JsonEntry, JsonFormatter};
pub use streaming::{RECURSIVE_MARKER, ROOT_ERROR_MARKER, StreamingFormatter};
