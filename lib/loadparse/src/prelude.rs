//! Prelude module for convenient imports.
//!
//! ```ignore
//! use loadparse::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Error, Fetcher, HttpClient, HyperClient, Locale, Method, NetError, ParseError,
    RawRecord, Request, RequestBuilder, Response, Result, StatusCode, TransportError, User,
    decode_user, decode_users, parse_records,
};
