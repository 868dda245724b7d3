//! Shared grammar primitives for CRS string parsing
//!
//! Every variant grammar and the extents parser tokenize numbers with the
//! same decimal-literal pattern so that numeric parsing behaves identically
//! across the whole grammar.

use regex::Captures;

use crate::crs::errors::{CrsError, CrsResult};

/// Pattern matching a decimal literal.
///
/// Matches may lead with a sign, a digit, or a period, and may carry an
/// exponent. Ex: `0`, `1.`, `.2`, `3.4`, `5.6e-4`
pub const DECIMAL_PATTERN: &str = r"[+-]?(?:\.\d+|\d+\.?\d*)(?:[eE][+-]?\d+)?";

/// Builds the all-or-nothing offset suffix fragment for a variant grammar.
///
/// Either all three offset components are present or none are; a trailing
/// partial triple fails the (anchored) grammar as a whole.
pub(crate) fn optional_offset_fragment() -> String {
    format!(r"(?: ({d}) ({d}) ({d}))?", d = DECIMAL_PATTERN)
}

/// Parses a decimal literal previously matched by [`DECIMAL_PATTERN`].
pub(crate) fn parse_decimal(text: &str) -> CrsResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CrsError::Parse(format!("invalid decimal literal: {}", text)))
}

/// Extracts an offset triple from capture groups `first..first + 2`.
///
/// Returns the zero offset when the optional groups did not participate in
/// the match.
pub(crate) fn parse_offset(caps: &Captures<'_>, first: usize) -> CrsResult<[f64; 3]> {
    match caps.get(first) {
        Some(m) => Ok([
            parse_decimal(m.as_str())?,
            parse_decimal(&caps[first + 1])?,
            parse_decimal(&caps[first + 2])?,
        ]),
        None => Ok([0.0; 3]),
    }
}
