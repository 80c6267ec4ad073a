/**
 * tokenizer.rs
 * One-pass scanner splitting a query template into literal spans and
 * `<<token:role>>` placeholder tags
 */

use crate::errors::{DashError, Result};

/// Opening placeholder marker, bit-exact.
pub const OPEN_MARKER: &str = "<<";

/// Closing placeholder marker, bit-exact.
pub const CLOSE_MARKER: &str = ">>";

/// One segment of a template.
///
/// `Tail` is the remainder after an unmatched `<<`: scanning stops there and
/// the text is carried through untouched by every substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain template text between tags.
    Literal(&'a str),
    /// A well-formed placeholder tag.
    Tag {
        /// The full bracketed text including markers, e.g. `<<T:dropdown1>>`.
        raw: &'a str,
        /// Text before the first `:`, untrimmed.
        token: &'a str,
        /// Text after the first `:`, trimmed.
        role: &'a str,
    },
    /// Unscanned remainder after an unmatched open marker.
    Tail(&'a str),
}

/// Split `template` into segments in a single left-to-right pass.
///
/// For each `<<` the next `>>` is searched from just past the open marker.
/// If no `>>` follows, scanning stops and the remainder (open marker
/// included) becomes a `Tail` segment. A bracketed body with no `:` is not
/// a tag; it is kept as a literal.
pub fn tokenize(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some(open_rel) = template[pos..].find(OPEN_MARKER) {
        let open = pos + open_rel;
        let body_start = open + OPEN_MARKER.len();

        let Some(close_rel) = template[body_start..].find(CLOSE_MARKER) else {
            // Unmatched open marker: stop scanning. Text before the marker is
            // still a resolvable literal; the marker and everything after it
            // is carried verbatim.
            if open > pos {
                segments.push(Segment::Literal(&template[pos..open]));
            }
            segments.push(Segment::Tail(&template[open..]));
            return segments;
        };
        let close = body_start + close_rel;
        let tag_end = close + CLOSE_MARKER.len();

        if open > pos {
            segments.push(Segment::Literal(&template[pos..open]));
        }

        let raw = &template[open..tag_end];
        let body = &template[body_start..close];
        match body.split_once(':') {
            Some((token, role)) => segments.push(Segment::Tag {
                raw,
                token,
                role: role.trim(),
            }),
            None => segments.push(Segment::Literal(raw)),
        }

        pos = tag_end;
    }

    if pos < template.len() {
        segments.push(Segment::Literal(&template[pos..]));
    }
    segments
}

/// Strict marker check: errors where [`tokenize`] would truncate.
///
/// Resolution itself keeps the historical truncation behavior; this is the
/// diagnostic for callers that want malformed templates surfaced instead.
pub fn check_markers(template: &str) -> Result<()> {
    for segment in tokenize(template) {
        if let Segment::Tail(tail) = segment {
            // A tail always starts at the unmatched open marker.
            let at = template.len() - tail.len();
            return Err(DashError::MalformedTemplate(format!(
                "unmatched '{}' at byte {}",
                OPEN_MARKER, at
            )));
        }
    }
    Ok(())
}
