//! Tree formatting and output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `tree` - Indented line renderer
//! - `document` - Context/plain/JSON document writer
//! - `json` - JSON output

mod config;
mod document;
mod json;
mod tree;

pub use config::{OutputConfig, OutputFormat};
pub use document::{Document, DocumentFormatter};
pub use json::write_json;
pub use tree::{INDENT_UNIT, TreeLine, TreeRenderer, render};
