//! Parsing raw bytes into a sequence of [`RawRecord`]s.

use crate::{ParseError, RawRecord};

/// Parse a JSON array of objects.
///
/// The whole buffer is checked for syntax first, so a truncated document is
/// always reported as [`ParseError::Syntax`], never as a shape problem. The
/// shape check then requires a top-level array whose every element is an
/// object; the error path points at the offending value.
///
/// Nested values inside each object are kept as-is. Documents nested deeper
/// than `serde_json`'s recursion limit (128) are rejected as syntax errors.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for invalid JSON and [`ParseError::Shape`]
/// for valid JSON that is not an array of objects. No partial result is
/// produced.
///
/// # Example
///
/// ```
/// use loadparse_core::parse_records;
///
/// let records = parse_records(br#"[{"id": 1}, {"id": 2, "tags": ["a"]}]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].get_int("id"), Some(2));
///
/// let err = parse_records(br#"{"id": 1}"#).unwrap_err();
/// assert!(err.is_shape());
///
/// let err = parse_records(br#"[{"id": 1"#).unwrap_err();
/// assert!(err.is_syntax());
/// ```
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>, ParseError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    serde_path_to_error::deserialize(value)
        .map_err(|err| ParseError::shape(err.path().to_string(), err.inner().to_string()))
}
