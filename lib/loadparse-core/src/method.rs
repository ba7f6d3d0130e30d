//! HTTP method types.

use derive_more::Display;

/// HTTP method of a fetch.
///
/// Fetches only read, so only safe methods are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[default]
    #[display("GET")]
    Get,
    /// HEAD method - retrieve headers only, the payload is empty.
    #[display("HEAD")]
    Head,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Head => Self::HEAD,
        }
    }
}
