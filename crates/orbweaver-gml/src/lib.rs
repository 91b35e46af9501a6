//! Loader for the GML graph-description format.
//!
//! GML is a line-oriented, bracket-delimited text format:
//!
//! ```text
//! graph [
//!   node [ id 0 label "hub" ]
//!   node [ id 1 ]
//!   edge [ source 0 target 1 value 2 ]
//! ]
//! ```
//!
//! The loader interprets the keys `id`, `label`, `source`, `target`, and
//! `value`; everything else is skipped. Loading is all-or-nothing: a
//! malformed or truncated file produces an error and no graph.

pub mod error;

mod parser;

pub use error::{LoadError, ParseError};

use std::{fs, path::Path};

use log::debug;

use orbweaver_core::graph::Graph;

/// Parse a GML document into a [`Graph`].
///
/// Node ids in the file are re-indexed to be 0-based: the correction is
/// latched from the first node id encountered (`0` leaves ids untouched,
/// any other value shifts every subsequent id down by one — the same
/// heuristic files with 1-based ids rely on). Edge weights default to 1,
/// and weight parsing is disabled for the rest of the file once an edge
/// block carries no `value` key.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for malformed or truncated input and
/// [`LoadError::Graph`] when an edge references a node outside the parsed
/// node range.
pub fn load_str(source: &str) -> Result<Graph, LoadError> {
    let (nodes, edges) = parser::parse_graph(source)?;
    debug!(
        node_count = nodes.len(),
        edge_count = edges.len();
        "Parsed graph description"
    );
    Ok(Graph::new(nodes, edges)?)
}

/// Read a GML file from disk and parse it with [`load_str`].
pub fn load_path(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let source = fs::read_to_string(path)?;
    load_str(&source)
}
