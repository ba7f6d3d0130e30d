//! One-shot fetching.
//!
//! A [`Fetcher`] sends a single request through an [`HttpClient`], classifies
//! the response and hands back the payload or a [`NetError`]. There is no
//! retry, no cancellation and no timeout at this layer: whatever the
//! transport does is what happens.

use bytes::Bytes;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    Error, HttpClient, HyperClient, NetError, Request, User, decode_users, parse_records,
};

/// Single-request fetcher over a transport.
///
/// # Example
///
/// ```ignore
/// use loadparse::Fetcher;
///
/// let fetcher = Fetcher::hyper();
/// let users = fetcher.fetch_users("https://example.com/users.json").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher<C = HyperClient> {
    client: C,
}

impl Fetcher {
    /// Create a fetcher over a [`HyperClient`] with default configuration.
    #[must_use]
    pub fn hyper() -> Self {
        Self::new(HyperClient::new())
    }
}

impl<C> Fetcher<C> {
    /// Create a fetcher over the given transport.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> Fetcher<C> {
    /// Send the request once and classify the outcome.
    ///
    /// 2xx statuses yield the body, possibly empty. Other statuses and
    /// transport failures yield a [`NetError`], see
    /// [`NetError::from_status`].
    pub async fn fetch(&self, request: Request) -> Result<Bytes, NetError> {
        let method = request.method();
        let url = request.url().clone();
        debug!(%method, %url, "fetching");

        let response = self.client.execute(request).await.map_err(|err| {
            warn!(%url, error = %err, "fetch failed before any response");
            NetError::from(err)
        })?;

        let status = response.status();
        response.into_payload().inspect_err(|err| {
            warn!(%url, status, error = %err, "fetch rejected by status");
        })
    }

    /// Parse the URL, then [`fetch`](Self::fetch) it with a GET.
    ///
    /// A malformed URL is reported as [`Error::InvalidUrl`] and nothing is
    /// sent.
    pub async fn fetch_url(&self, url: &str) -> Result<Bytes, Error> {
        let request = Request::get(url)?.build();
        Ok(self.fetch(request).await?)
    }

    /// Fetch a JSON array of users and decode it.
    ///
    /// Records that do not decode are dropped; the result keeps the order of
    /// the remaining ones. Fetch and parse failures are errors.
    pub async fn fetch_users(&self, url: &str) -> Result<Vec<User>, Error> {
        let body = self.fetch_url(url).await?;
        let records = parse_records(&body)?;
        let users = decode_users(&records);

        let dropped = records.len() - users.len();
        if dropped > 0 {
            debug!(url, dropped, kept = users.len(), "records dropped while decoding");
        }
        Ok(users)
    }
}

impl<C> Fetcher<C>
where
    C: HttpClient + Clone + 'static,
{
    /// Run [`fetch`](Self::fetch) on the Tokio runtime and hand the result to
    /// `on_complete`, exactly once, from the spawned task.
    ///
    /// Dropping the returned handle does not cancel the fetch.
    ///
    /// Outside a Tokio runtime nothing is sent: `on_complete` is called
    /// right away with [`NetError::Fatal`] and `None` is returned.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let handle = fetcher.fetch_then(request, |result| match result {
    ///     Ok(body) => println!("{} bytes", body.len()),
    ///     Err(err) => eprintln!("{err}"),
    /// });
    /// if let Some(handle) = handle {
    ///     handle.await?;
    /// }
    /// ```
    pub fn fetch_then<F>(&self, request: Request, on_complete: F) -> Option<JoinHandle<()>>
    where
        F: FnOnce(Result<Bytes, NetError>) + Send + 'static,
    {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!(url = %request.url(), error = %err, "no runtime to fetch on");
                on_complete(Err(NetError::fatal(format!("no Tokio runtime: {err}"))));
                return None;
            }
        };

        let fetcher = self.clone();
        Some(runtime.spawn(async move {
            let result = fetcher.fetch(request).await;
            on_complete(result);
        }))
    }
}
