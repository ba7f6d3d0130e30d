//! Typed decoding of [`RawRecord`]s into [`User`]s.
//!
//! Decoding fails closed: a record either yields a complete `User` or
//! nothing. Every required field is inspected before deciding, so
//! [`decode_user_report`] can list all the failing fields at once.
//!
//! Batch decoding is lossy on purpose: [`decode_users`] drops the records that
//! do not decode and does not report how many were dropped.

use std::fmt;

use derive_more::{Display, Error};

use crate::RawRecord;
use crate::user::{AVATAR_KEY, FULL_NAME_KEY, ID_KEY, User};

/// Why one field could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FailureKind {
    /// The key is absent.
    #[display("missing")]
    Missing,
    /// The key holds a value of the wrong JSON type.
    #[display("of the wrong type")]
    WrongType,
}

/// A required field that could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("`{field}` is {kind}")]
pub struct FieldFailure {
    /// JSON key of the field.
    pub field: &'static str,
    /// What went wrong.
    pub kind: FailureKind,
}

/// Every field that prevented a record from decoding, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct DecodeFailure {
    failures: Vec<FieldFailure>,
}

impl DecodeFailure {
    /// Failing fields.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot decode user: ")?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

fn required<'r, T>(
    record: &'r RawRecord,
    field: &'static str,
    get: impl FnOnce(&'r RawRecord, &str) -> Option<T>,
) -> Result<T, FieldFailure> {
    if !record.contains_key(field) {
        return Err(FieldFailure {
            field,
            kind: FailureKind::Missing,
        });
    }
    get(record, field).ok_or(FieldFailure {
        field,
        kind: FailureKind::WrongType,
    })
}

/// Decode a record, reporting every failing field.
///
/// # Example
///
/// ```
/// use loadparse_core::{FailureKind, RawRecord, decode_user_report};
///
/// let record: RawRecord = serde_json::from_str(r#"{"id": "1", "user_fullname": "Ana"}"#).unwrap();
/// let failure = decode_user_report(&record).unwrap_err();
///
/// let kinds: Vec<_> = failure.failures().iter().map(|f| (f.field, f.kind)).collect();
/// assert_eq!(
///     kinds,
///     [("id", FailureKind::WrongType), ("user_avatar", FailureKind::Missing)]
/// );
/// ```
pub fn decode_user_report(record: &RawRecord) -> Result<User, DecodeFailure> {
    let id = required(record, ID_KEY, RawRecord::get_int);
    let full_name = required(record, FULL_NAME_KEY, RawRecord::get_str);
    let avatar = required(record, AVATAR_KEY, RawRecord::get_str);

    match (id, full_name, avatar) {
        (Ok(id), Ok(full_name), Ok(avatar)) => Ok(User::new(id, full_name, avatar)),
        (id, full_name, avatar) => Err(DecodeFailure {
            failures: [id.err(), full_name.err(), avatar.err()]
                .into_iter()
                .flatten()
                .collect(),
        }),
    }
}

/// Decode a record into a [`User`], or `None` if any required field is
/// missing or mistyped.
#[must_use]
pub fn decode_user(record: &RawRecord) -> Option<User> {
    decode_user_report(record).ok()
}

/// Decode every record, keeping input order and dropping the ones that fail.
#[must_use]
pub fn decode_users(records: &[RawRecord]) -> Vec<User> {
    records.iter().filter_map(decode_user).collect()
}
