//! Error types for the GML loader.

use std::io;

use thiserror::Error;

use orbweaver_core::GraphError;

/// Errors raised while parsing a GML graph description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not well-formed GML (including truncated files with a
    /// missing closing bracket).
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// The input contains no top-level `graph` block.
    #[error("no top-level `graph` block found")]
    MissingGraph,

    /// A node or edge block lacks one of its required keys.
    #[error("{block} block is missing required key `{key}`")]
    MissingKey {
        block: &'static str,
        key: &'static str,
    },

    /// A numeric field could not be parsed.
    #[error("invalid numeric value {value:?} for `{field}`")]
    Number { field: &'static str, value: String },

    /// An edge endpoint became negative after the id-offset correction.
    #[error("edge endpoint {value} is negative after id correction")]
    NegativeId { value: i64 },
}

/// Errors raised while loading a graph from GML input.
///
/// Loading is all-or-nothing: any variant means no graph was produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
