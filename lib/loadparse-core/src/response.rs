//! HTTP response handling.
//!
//! [`Response`] gives access to status, headers and body, and turns itself
//! into a payload or a [`NetError`] with [`Response::into_payload`].

use std::collections::HashMap;

use bytes::Bytes;

use crate::NetError;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    ///
    /// The hyper transport joins repeated headers with `", "`, so a
    /// `set-cookie` list comes back as one comma-separated value.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body, whatever the status.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Classify the status and keep the body only on success.
    ///
    /// See [`NetError::from_status`] for the policy. An empty body is a valid
    /// payload.
    pub fn into_payload(self) -> Result<B, NetError> {
        match NetError::from_status(self.status) {
            None => Ok(self.body),
            Some(err) => Err(err),
        }
    }
}
