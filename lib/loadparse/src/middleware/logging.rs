//! Exchange logging middleware.
//!
//! Logs one event when the request leaves and one when the response (or the
//! transport error) comes back, inside an `http_exchange` span.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Request, Response, StatusCode, TransportError};

/// Layer that adds exchange logging.
///
/// # Example
///
/// ```ignore
/// use loadparse::HyperClient;
/// use loadparse::middleware::LoggingLayer;
///
/// let client = HyperClient::builder().layer(LoggingLayer::debug()).build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Verbosity of the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level, request headers and response size included.
    Debug,
    /// Info level, method, URL, status and timing.
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a logging layer at info level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service that logs exchanges.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

impl<S> Service<Request> for Logging<S>
where
    S: Service<Request, Response = Response<Bytes>, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Response<Bytes>, TransportError>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let method = request.method();
        let url = request.url().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "http_exchange", %method, %url);

        // the clone is not ready, the polled service goes to this call
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(
            async move {
                let start = Instant::now();

                match level {
                    LogLevel::Debug => {
                        debug!(headers = ?request.headers(), "sending request");
                    }
                    LogLevel::Info => info!("sending request"),
                }

                let result = inner.call(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) => {
                        let status = response.status();
                        let reason = StatusCode::from_u16(status)
                            .ok()
                            .and_then(|code| code.canonical_reason())
                            .unwrap_or("");
                        if level == LogLevel::Debug {
                            debug!(bytes = response.body().len(), "response body received");
                        }
                        if response.is_success() {
                            info!(status, reason, elapsed_ms, "exchange completed");
                        } else {
                            warn!(status, reason, elapsed_ms, "exchange completed with error");
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, elapsed_ms, "exchange failed");
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tower::{ServiceExt, service_fn};

    use super::*;

    #[test]
    fn logging_layer_default() {
        assert_eq!(LoggingLayer::new().level, LogLevel::Info);
        assert_eq!(LoggingLayer::debug().level, LogLevel::Debug);
    }

    #[tokio::test]
    async fn passes_responses_and_errors_through() {
        let inner = service_fn(|request: Request| async move {
            if request.url().path() == "/down" {
                Err(TransportError::connection("refused"))
            } else {
                Ok(Response::new(404, HashMap::new(), Bytes::from("missing")))
            }
        });
        let service = LoggingLayer::debug().layer(inner);

        let request = Request::get("http://localhost/users").expect("url").build();
        let response = service.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), 404);
        assert_eq!(response.body(), &Bytes::from("missing"));

        let request = Request::get("http://localhost/down").expect("url").build();
        let err = service.oneshot(request).await.expect_err("transport error");
        assert_eq!(err, TransportError::connection("refused"));
    }
}
