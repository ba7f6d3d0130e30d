//! HTTP transport implementation using hyper-util.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::util::BoxCloneService;
use tower::{Layer, ServiceExt};
use tower_service::Service;

use crate::{
    HttpClient, Request, Response, TransportError,
    config::{ClientConfig, ClientConfigBuilder},
    connector::https_connector,
    middleware::LoggingLayer,
};

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased transport service, the unit tower layers are stacked on.
pub type BoxedService = BoxCloneService<Request, Response<Bytes>, TransportError>;

/// Future type for Tower Service implementation.
pub type ServiceFuture =
    Pin<Box<dyn Future<Output = Result<Response<Bytes>, TransportError>> + Send + 'static>>;

/// `BoxCloneService` is not `Sync`; the mutex is only held while cloning.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request) -> ServiceFuture {
        let service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        // a fresh clone is not ready yet, `oneshot` waits for `poll_ready`
        Box::pin(service.oneshot(request))
    }
}

// ============================================================================
// Raw Client
// ============================================================================

/// Bare hyper-util client, the innermost service.
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl RawHyperClient {
    fn new(config: ClientConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector(&config));

        Self { inner, config }
    }

    fn build_hyper_request(
        &self,
        request: Request,
    ) -> Result<http::Request<Full<Bytes>>, TransportError> {
        let (method, url, headers) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        let has_user_agent = headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case(http::header::USER_AGENT.as_str()));
        if !has_user_agent && let Some(user_agent) = &self.config.user_agent {
            builder = builder.header(http::header::USER_AGENT, user_agent.as_str());
        }

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body(Full::default())
            .map_err(|e| TransportError::invalid_request(e.to_string()))
    }

    /// Flatten to one entry per name: repeated values are joined with `", "`
    /// in arrival order, non-UTF-8 bytes are replaced with U+FFFD.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        let mut extracted = HashMap::with_capacity(headers.keys_len());
        for name in headers.keys() {
            let values: Vec<_> = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect();
            extracted.insert(name.to_string(), values.join(", "));
        }
        extracted
    }

    async fn exchange(
        &self,
        request: http::Request<Full<Bytes>>,
    ) -> Result<Response<Bytes>, TransportError> {
        let response = self
            .inner
            .request(request)
            .await
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportError::connection(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, headers, body))
    }

    async fn execute(&self, request: Request) -> Result<Response<Bytes>, TransportError> {
        let hyper_request = self.build_hyper_request(request)?;

        tokio::time::timeout(self.config.timeout, self.exchange(hyper_request))
            .await
            .map_err(|_| TransportError::Timeout)?
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> TransportError {
        let msg = err.to_string();
        let detail = std::error::Error::source(&err)
            .map_or_else(|| msg.clone(), |source| format!("{msg}: {source}"));

        // handshake failures surface as connect errors too
        let lower = detail.to_ascii_lowercase();
        if lower.contains("tls") || lower.contains("certificate") {
            return TransportError::tls(detail);
        }

        TransportError::connection(detail)
    }
}

impl Service<Request> for RawHyperClient {
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await })
    }
}

// ============================================================================
// Public Client
// ============================================================================

/// HTTP transport with connection pooling, TLS, and tower layers.
///
/// Every status is returned as a [`Response`]; turning a status into a
/// [`NetError`](crate::NetError) is the [`Fetcher`](crate::Fetcher)'s job.
/// Clones share the connection pool.
///
/// # Example
///
/// ```ignore
/// use loadparse::HyperClient;
/// use std::time::Duration;
///
/// let client = HyperClient::new();
///
/// let client = HyperClient::builder()
///     .timeout(Duration::from_secs(5))
///     .with_logging()
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    service: SyncService,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration and no layers.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let raw = RawHyperClient::new(config.clone());
        Self {
            service: SyncService::new(BoxCloneService::new(raw)),
            config,
        }
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<Response<Bytes>, TransportError> {
        self.service.call(request).await
    }
}

impl Service<Request> for HyperClient {
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HyperClient`].
///
/// Layers are applied in order: first added = outermost.
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
    layers: Vec<Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>>,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .finish()
    }
}

impl HyperClientBuilder {
    /// Set the transport timeout, body included.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Set the default `User-Agent`.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    /// Send no default `User-Agent`.
    #[must_use]
    pub fn without_user_agent(mut self) -> Self {
        self.config = self.config.without_user_agent();
        self
    }

    /// Add a Tower layer to the transport.
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response<Bytes>, Error = TransportError>
            + Clone
            + Send
            + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Log every exchange at info level.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Log every exchange at debug level, headers included.
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    /// Build the client with all configured layers.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = self.config.build();
        let mut service: BoxedService = BoxCloneService::new(RawHyperClient::new(config.clone()));

        // wrap innermost first so the first layer added sees requests first
        for layer_fn in self.layers.into_iter().rev() {
            service = layer_fn(service);
        }

        HyperClient {
            service: SyncService::new(service),
            config,
        }
    }
}
