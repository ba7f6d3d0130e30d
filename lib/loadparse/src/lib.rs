//! Fetch one JSON array over HTTP and decode it into typed records.
//!
//! The fetcher sends a single request, classifies the HTTP status, parses the
//! body as an array of JSON objects and decodes each object into a [`User`],
//! dropping the ones that do not decode.
//!
//! - [`Fetcher`] - one-shot fetch, awaited or with a completion callback
//! - [`HyperClient`] - HTTPS transport on hyper, extensible with tower layers
//! - [`ClientConfig`] - timeouts, pooling and the default `User-Agent`
//! - [`middleware`] - exchange logging layer
//!
//! # Example
//!
//! ```ignore
//! use loadparse::{Fetcher, Locale};
//!
//! let fetcher = Fetcher::hyper();
//! match fetcher.fetch_users("https://example.com/users.json").await {
//!     Ok(users) => {
//!         for user in users {
//!             println!("{} {}", user.id(), user.full_name());
//!         }
//!     }
//!     Err(err) => eprintln!("{}", err.describe(Locale::English)),
//! }
//! ```

mod client;
mod config;
mod connector;
mod fetch;
pub mod middleware;
pub mod prelude;

pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_USER_AGENT};
pub use fetch::Fetcher;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use loadparse_core::{
    AVATAR_KEY, DecodeFailure, Error, FULL_NAME_KEY, FailureKind, FieldFailure, HttpClient,
    ID_KEY, Locale, Method, NetError, ParseError, RawRecord, Request, RequestBuilder, Response,
    Result, StatusCode, TransportError, User, decode_user, decode_user_report, decode_users,
    parse_records,
};

pub use url;
