//! Prelude module for convenient imports.
//!
//! ```ignore
//! use loadparse_core::prelude::*;
//! ```

pub use crate::{
    Error, HttpClient, Locale, Method, NetError, ParseError, RawRecord, Request, RequestBuilder,
    Response, Result, TransportError, User, decode_user, decode_users, parse_records,
};
