//! Converts a PHP source file into a JSON rendering of its syntax tree.
//!
//! Parsing is delegated entirely to tree-sitter with the PHP grammar; this
//! crate only orchestrates the parse attempts, mirrors the resulting tree
//! into a serializable shape, and writes it next to the input file.

pub mod convert;
pub mod diagnostics;
pub mod json;
pub mod strategy;

pub use convert::{convert, output_path, Outcome};
pub use diagnostics::{ConvertError, StrategyFailure};
pub use json::JsonNode;
pub use strategy::ParseStrategy;
