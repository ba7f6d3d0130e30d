//! Middleware tests: layers stacked on `HyperClient` see every exchange.

use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use bytes::Bytes;
use loadparse::middleware::LoggingLayer;
use loadparse::tower::{Layer, Service};
use loadparse::{Fetcher, HttpClient, HyperClient, NetError, Request, Response, TransportError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Records its name on every request that goes through it.
#[derive(Clone)]
struct Tag {
    name: &'static str,
    seen: Arc<Mutex<Vec<&'static str>>>,
}

impl<S> Layer<S> for Tag {
    type Service = Tagged<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Tagged {
            inner,
            tag: self.clone(),
        }
    }
}

#[derive(Clone)]
struct Tagged<S> {
    inner: S,
    tag: Tag,
}

impl<S> Service<Request> for Tagged<S>
where
    S: Service<Request, Response = Response<Bytes>, Error = TransportError>,
{
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        self.tag.seen.lock().expect("lock").push(self.tag.name);
        self.inner.call(request)
    }
}

/// Refuses any `call` that was not preceded by a successful `poll_ready`,
/// like tower's concurrency and rate limits do.
#[derive(Clone, Copy)]
struct ReadyGate;

impl<S> Layer<S> for ReadyGate {
    type Service = Gated<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Gated {
            inner,
            ready: false,
        }
    }
}

struct Gated<S> {
    inner: S,
    ready: bool,
}

// readiness belongs to one instance, a clone starts over
impl<S: Clone> Clone for Gated<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            ready: false,
        }
    }
}

impl<S> Service<Request> for Gated<S>
where
    S: Service<Request, Response = Response<Bytes>, Error = TransportError>,
{
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), TransportError>> {
        let poll = self.inner.poll_ready(cx);
        if matches!(poll, Poll::Ready(Ok(()))) {
            self.ready = true;
        }
        poll
    }

    fn call(&mut self, request: Request) -> Self::Future {
        assert!(
            std::mem::take(&mut self.ready),
            "call without a successful poll_ready"
        );
        self.inner.call(request)
    }
}

async fn mock(status: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string("[]"))
        .mount(&mock_server)
        .await;
    mock_server
}

/// Logging must not alter the exchange.
#[tokio::test]
async fn test_logging_middleware() {
    let mock_server = mock(200).await;
    let client = HyperClient::builder().with_logging().build();

    let users = Fetcher::new(client)
        .fetch_users(&format!("{}/users.json", mock_server.uri()))
        .await
        .expect("users");

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_debug_logging_passes_error_statuses() {
    let mock_server = mock(500).await;
    let client = HyperClient::builder().with_debug_logging().build();

    let request = Request::get(&format!("{}/users.json", mock_server.uri()))
        .expect("url")
        .build();
    let response = client.execute(request.clone()).await.expect("response");
    assert_eq!(response.status(), 500);

    let result = Fetcher::new(client).fetch(request).await;
    assert_eq!(result, Err(NetError::ServerError(500)));
}

#[tokio::test]
async fn test_first_layer_added_is_outermost() {
    let mock_server = mock(200).await;
    let seen = Arc::new(Mutex::new(Vec::new()));

    let client = HyperClient::builder()
        .layer(Tag {
            name: "outer",
            seen: Arc::clone(&seen),
        })
        .layer(LoggingLayer::new())
        .layer(Tag {
            name: "inner",
            seen: Arc::clone(&seen),
        })
        .build();

    let request = Request::get(&format!("{}/users.json", mock_server.uri()))
        .expect("url")
        .build();
    client.execute(request).await.expect("response");

    assert_eq!(*seen.lock().expect("lock"), ["outer", "inner"]);
}

#[tokio::test]
async fn test_layers_see_transport_failures() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let client = HyperClient::builder()
        .with_logging()
        .layer(Tag {
            name: "tag",
            seen: Arc::clone(&seen),
        })
        .build();

    let request = Request::get("http://127.0.0.1:1/users.json")
        .expect("url")
        .build();
    let result = Fetcher::new(client).fetch(request).await;

    assert!(matches!(result, Err(NetError::Fatal(_))));
    assert_eq!(*seen.lock().expect("lock"), ["tag"]);
}

#[tokio::test]
async fn test_layers_are_polled_before_call() {
    let mock_server = mock(200).await;
    let client = HyperClient::builder()
        .layer(ReadyGate)
        .with_logging()
        .layer(ReadyGate)
        .build();
    let fetcher = Fetcher::new(client);
    let url = format!("{}/users.json", mock_server.uri());

    for _ in 0..3 {
        let users = fetcher.fetch_users(&url).await.expect("users");
        assert!(users.is_empty());
    }
}
