//! Transport trait.
//!
//! [`HttpClient`] is the only thing the fetch layer needs from the network:
//! send one request, get back a buffered response or a [`TransportError`].
//! Connection handling, TLS and DNS belong to the implementation.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, TransportError};

/// Core HTTP client trait.
///
/// Implementations should be async-first and manage their own connection
/// pool. Any HTTP status, including 4xx and 5xx, is a successful execution;
/// classification happens above this layer.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use loadparse_core::{HttpClient, Request, Response, TransportError};
///
/// struct Canned(&'static str);
///
/// impl HttpClient for Canned {
///     async fn execute(&self, _request: Request) -> Result<Response<Bytes>, TransportError> {
///         Ok(Response::new(200, Default::default(), Bytes::from_static(self.0.as_bytes())))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid request
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response<Bytes>, TransportError>> + Send;
}

impl<C: HttpClient> HttpClient for &C {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response<Bytes>, TransportError>> + Send {
        (**self).execute(request)
    }
}

impl<C: HttpClient> HttpClient for std::sync::Arc<C> {
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response<Bytes>, TransportError>> + Send {
        (**self).execute(request)
    }
}
