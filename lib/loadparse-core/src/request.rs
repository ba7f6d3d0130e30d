//! Fetch request descriptor.
//!
//! A [`Request`] always holds a parsed [`url::Url`], so a malformed URL is
//! rejected while building the request, before anything is dispatched.
//!
//! # Example
//!
//! ```
//! use loadparse_core::Request;
//!
//! let request = Request::get("https://api.example.com/users")
//!     .expect("valid URL")
//!     .header("Accept", "application/json")
//!     .build();
//!
//! assert_eq!(request.url().path(), "/users");
//! ```

use std::collections::HashMap;

use url::Url;

use crate::Method;

/// A body-less HTTP request: method, URL and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HashMap<String, String>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// Starts a GET request, parsing the URL.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `url` is not a well-formed absolute URL.
    pub fn get(url: &str) -> Result<RequestBuilder, url::ParseError> {
        Url::parse(url).map(|url| RequestBuilder::new(Method::Get, url))
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Consume into (method, url, headers).
    #[must_use]
    pub fn into_parts(self) -> (Method, Url, HashMap<String, String>) {
        (self.method, self.url, self.headers)
    }
}

impl From<Url> for Request {
    fn from(url: Url) -> Self {
        RequestBuilder::new(Method::Get, url).build()
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
        }
    }

    /// Sets the method.
    #[must_use]
    pub const fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
        }
    }
}
