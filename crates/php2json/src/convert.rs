use std::fs;
use std::path::{Path, PathBuf};

use crate::diagnostics::{ConvertError, StrategyFailure};
use crate::json::JsonNode;
use crate::strategy::ParseStrategy;

/// Result of one conversion.
#[derive(Debug)]
pub enum Outcome {
    /// The named strategy accepted the input and the tree was written.
    Written {
        path: PathBuf,
        strategy: &'static str,
    },
    /// Every strategy rejected the input; nothing was written.
    Unparsable { failures: Vec<StrategyFailure> },
}

/// Sibling output path: the extension becomes `.json`, replacing an existing
/// one or appended when the input has none.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Reads `path`, parses it with each strategy in order, and writes the
/// winning tree as 2-space-indented JSON next to the input.
///
/// The write is a single complete-buffer write after full serialization, so
/// an existing output file is either replaced whole or left untouched.
pub fn convert(path: &Path) -> Result<Outcome, ConvertError> {
    let out = output_path(path);
    let source = fs::read_to_string(path).map_err(|e| ConvertError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut failures = Vec::new();
    for strategy in ParseStrategy::all() {
        match strategy.parse(&source) {
            Ok(tree) => {
                let json = serde_json::to_string_pretty(&JsonNode::from_tree(&tree, &source))?;
                fs::write(&out, json).map_err(|e| ConvertError::Write {
                    path: out.clone(),
                    source: e,
                })?;
                return Ok(Outcome::Written {
                    path: out,
                    strategy: strategy.name(),
                });
            }
            Err(failure) => failures.push(failure),
        }
    }
    Ok(Outcome::Unparsable { failures })
}
