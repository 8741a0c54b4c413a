use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tree_sitter::LanguageError;

/// A parse attempt that did not produce a usable tree.
#[derive(Debug, Error)]
#[error("{strategy} parse failed: {kind}")]
pub struct StrategyFailure {
    pub strategy: &'static str,
    pub kind: FailureKind,
}

/// Why a single strategy rejected the input.
#[derive(Debug, Error)]
pub enum FailureKind {
    #[error("could not load grammar: {0}")]
    Grammar(#[from] LanguageError),

    #[error("parser produced no tree")]
    Bailed,

    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
}

impl StrategyFailure {
    pub fn grammar(strategy: &'static str, error: LanguageError) -> Self {
        Self {
            strategy,
            kind: FailureKind::Grammar(error),
        }
    }

    pub fn bailed(strategy: &'static str) -> Self {
        Self {
            strategy,
            kind: FailureKind::Bailed,
        }
    }

    /// `point` is the parser's 0-based position; reported 1-based.
    pub fn syntax(strategy: &'static str, point: tree_sitter::Point) -> Self {
        Self {
            strategy,
            kind: FailureKind::Syntax {
                line: point.row + 1,
                column: point.column + 1,
            },
        }
    }
}

/// Failures of the conversion itself, as opposed to a rejected parse.
/// These propagate to the caller; only parse rejection is recovered.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize syntax tree")]
    Json(#[from] serde_json::Error),
}
