//! Winnow parser for the GML graph-description format.
//!
//! Parsing happens in two passes. The grammar pass reads the whole input
//! into generic key/value entries, where a value is a bare token, a quoted
//! string, or a nested bracket block; this is what lets unrecognized keys
//! (and whole unrecognized blocks) be skipped without knowing them. The
//! conversion pass then walks the top-level `graph` block and extracts node
//! and edge definitions, applying the id-offset correction and the edge
//! weight latch.

use winnow::{
    ModalResult, Parser,
    ascii::{multispace1, till_line_ending},
    combinator::{alt, cut_err, delimited, eof, preceded, repeat, terminated},
    error::{StrContext, StrContextValue},
    token::{take_till, take_while},
};

use orbweaver_core::graph::{Edge, Node};

use crate::error::ParseError;

/// A parsed GML value.
#[derive(Debug, Clone, PartialEq)]
enum RawValue<'src> {
    /// Bare token, e.g. `42`, `1.5`, `circle`.
    Scalar(&'src str),
    /// Contents of a double-quoted string.
    Quoted(&'src str),
    /// A nested `[ ... ]` block.
    Block(Vec<RawEntry<'src>>),
}

/// One `key value` pair inside a GML block.
#[derive(Debug, Clone, PartialEq)]
struct RawEntry<'src> {
    key: &'src str,
    value: RawValue<'src>,
}

/// Skip whitespace and `#` line comments
fn ws<'src>(input: &mut &'src str) -> ModalResult<()> {
    repeat(
        0..,
        alt((multispace1.void(), ("#", till_line_ending).void())),
    )
    .parse_next(input)
}

/// Parse a GML key: an identifier starting with a letter
fn key_token<'src>(input: &mut &'src str) -> ModalResult<&'src str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .verify(|key: &str| {
            key.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        })
        .context(StrContext::Label("key"))
        .parse_next(input)
}

/// Parse a bare scalar token (number or unquoted word)
fn bare_scalar<'src>(input: &mut &'src str) -> ModalResult<&'src str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && c != '[' && c != ']' && c != '"'
    })
    .context(StrContext::Label("value"))
    .parse_next(input)
}

/// Parse a double-quoted string, returning its contents
fn quoted_string<'src>(input: &mut &'src str) -> ModalResult<&'src str> {
    delimited(
        '"',
        take_till(0.., '"'),
        cut_err('"').context(StrContext::Expected(StrContextValue::CharLiteral('"'))),
    )
    .parse_next(input)
}

/// Parse a `[ ... ]` block of entries.
///
/// A missing closing bracket (truncated input) is a hard error rather than
/// a backtrack, so the failure surfaces at the point of truncation.
fn block<'src>(input: &mut &'src str) -> ModalResult<Vec<RawEntry<'src>>> {
    preceded(
        '[',
        cut_err(terminated(
            repeat(0.., entry),
            preceded(
                ws,
                ']'.context(StrContext::Expected(StrContextValue::CharLiteral(']'))),
            ),
        )),
    )
    .parse_next(input)
}

/// Parse a value: nested block, quoted string, or bare token
fn value<'src>(input: &mut &'src str) -> ModalResult<RawValue<'src>> {
    preceded(
        ws,
        alt((
            block.map(RawValue::Block),
            quoted_string.map(RawValue::Quoted),
            bare_scalar.map(RawValue::Scalar),
        )),
    )
    .parse_next(input)
}

/// Parse one `key value` entry
fn entry<'src>(input: &mut &'src str) -> ModalResult<RawEntry<'src>> {
    let key = preceded(ws, key_token).parse_next(input)?;
    let value = cut_err(value)
        .context(StrContext::Label("value"))
        .parse_next(input)?;
    Ok(RawEntry { key, value })
}

/// Parse a whole GML document into top-level entries
fn document<'src>(input: &mut &'src str) -> ModalResult<Vec<RawEntry<'src>>> {
    terminated(repeat(0.., entry), (ws, eof)).parse_next(input)
}

/// Run the grammar pass over a full source string.
fn parse_document(source: &str) -> Result<Vec<RawEntry<'_>>, ParseError> {
    document.parse(source).map_err(|err| ParseError::Syntax {
        offset: err.offset(),
        message: err.inner().to_string(),
    })
}

/// Find the first field with the given key inside a block.
fn find_value<'a, 'src>(
    fields: &'a [RawEntry<'src>],
    key: &str,
) -> Option<&'a RawValue<'src>> {
    fields
        .iter()
        .find(|field| field.key == key)
        .map(|field| &field.value)
}

/// Extract a required integer field from a block.
fn require_int(
    fields: &[RawEntry<'_>],
    block: &'static str,
    key: &'static str,
) -> Result<i64, ParseError> {
    match find_value(fields, key) {
        Some(RawValue::Scalar(raw)) => raw.parse::<i64>().map_err(|_| ParseError::Number {
            field: key,
            value: (*raw).to_string(),
        }),
        Some(other) => Err(ParseError::Number {
            field: key,
            value: format!("{other:?}"),
        }),
        None => Err(ParseError::MissingKey { block, key }),
    }
}

/// Convert a (possibly negative) corrected id into a node index.
fn endpoint(value: i64) -> Result<usize, ParseError> {
    usize::try_from(value).map_err(|_| ParseError::NegativeId { value })
}

/// Parse GML source into node and edge sequences.
///
/// Implements the loader contract: the id-offset correction is latched from
/// the first node id encountered (`0` means ids are 0-based; anything else
/// means 1-based and every id is shifted down by one), and edge weight
/// parsing is disabled for the rest of the file as soon as one edge block
/// carries no `value` key.
pub(crate) fn parse_graph(source: &str) -> Result<(Vec<Node>, Vec<Edge>), ParseError> {
    let entries = parse_document(source)?;

    let graph_entries = entries
        .iter()
        .find_map(|entry| match (entry.key, &entry.value) {
            ("graph", RawValue::Block(inner)) => Some(inner),
            _ => None,
        })
        .ok_or(ParseError::MissingGraph)?;

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    // Latched from the first node id: Some(0) for 0-based files, Some(1)
    // for 1-based ones.
    let mut id_offset: Option<i64> = None;
    let mut has_weights = true;

    for entry in graph_entries {
        match (entry.key, &entry.value) {
            ("node", RawValue::Block(fields)) => {
                let raw_id = require_int(fields, "node", "id")?;
                let offset = *id_offset.get_or_insert(if raw_id == 0 { 0 } else { 1 });
                let id = raw_id - offset;

                let label = match find_value(fields, "label") {
                    Some(RawValue::Quoted(text)) => (*text).to_string(),
                    Some(RawValue::Scalar(text)) => (*text).to_string(),
                    _ => id.to_string(),
                };

                nodes.push(Node::labeled(label));
            }
            ("edge", RawValue::Block(fields)) => {
                let offset = id_offset.unwrap_or(0);
                let source_id = endpoint(require_int(fields, "edge", "source")? - offset)?;
                let target_id = endpoint(require_int(fields, "edge", "target")? - offset)?;

                let weight = if has_weights {
                    match find_value(fields, "value") {
                        Some(RawValue::Scalar(raw)) => {
                            raw.parse::<f32>().map_err(|_| ParseError::Number {
                                field: "value",
                                value: (*raw).to_string(),
                            })?
                        }
                        _ => {
                            // Weight-consistent files only: one edge without
                            // a value disables weights for the rest.
                            has_weights = false;
                            1.0
                        }
                    }
                } else {
                    1.0
                };

                edges.push(Edge::weighted(source_id, target_id, weight));
            }
            // Other keys (directed, label, Creator metadata, ...) are skipped.
            _ => {}
        }
    }

    Ok((nodes, edges))
}
