//! Core types for loadparse: fetch one JSON array over HTTP and decode it into
//! typed records.
//!
//! This crate is transport-agnostic:
//! - [`Method`], [`Request`] and [`RequestBuilder`] - fetch request descriptor
//! - [`Response`] - buffered HTTP response, classified by [`Response::into_payload`]
//! - [`HttpClient`] - the transport collaborator
//! - [`NetError`], [`ParseError`], [`TransportError`], [`Error`] - error handling
//! - [`parse_records`] - bytes to a sequence of [`RawRecord`]s
//! - [`decode_user`] and [`decode_users`] - [`RawRecord`] to [`User`]
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//!
//! # Example
//!
//! ```
//! use loadparse_core::{decode_users, parse_records};
//!
//! let body = br#"[
//!     {"id": 1, "user_fullname": "Ana", "user_avatar": "https://example.com/1.png"},
//!     {"id": "2", "user_fullname": "Bia", "user_avatar": "https://example.com/2.png"}
//! ]"#;
//!
//! let records = parse_records(body).expect("array of objects");
//! let users = decode_users(&records);
//!
//! assert_eq!(users.len(), 1);
//! assert_eq!(users[0].full_name(), "Ana");
//! ```

mod client;
mod decode;
mod error;
mod json;
mod method;
pub mod prelude;
mod record;
mod request;
mod response;
mod user;

pub use client::HttpClient;
pub use decode::{
    DecodeFailure, FailureKind, FieldFailure, decode_user, decode_user_report, decode_users,
};
pub use error::{Error, Locale, NetError, ParseError, Result, TransportError};
pub use json::parse_records;
pub use method::Method;
pub use record::RawRecord;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use user::{AVATAR_KEY, FULL_NAME_KEY, ID_KEY, User};

// Re-export http crate type for status codes
pub use http::StatusCode;
