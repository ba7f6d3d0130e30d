//! Tower middleware layers for the [`HyperClient`](crate::HyperClient) transport.
//!
//! Layers wrap the transport service, so they see every exchange, whatever
//! its status. The fetcher adds no retry, redirect or timeout layer of its
//! own.
//!
//! - [`LoggingLayer`] - Logs exchanges using `tracing`
//!
//! Any other tower layer whose service speaks `Request` / `Response<Bytes>` /
//! `TransportError` can be added with
//! [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer).

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
