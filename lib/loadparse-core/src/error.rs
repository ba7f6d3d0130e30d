//! Error types for loadparse.
//!
//! Three layers fail in three different ways:
//! - [`TransportError`] is raised by an [`HttpClient`](crate::HttpClient) implementation,
//! - [`NetError`] is the terminal classification of one fetch attempt,
//! - [`ParseError`] reports a payload that is not a JSON array of objects.
//!
//! [`Error`] gathers them for the fetch-parse-decode pipeline.

use derive_more::{Display, Error, From};

// ============================================================================
// Transport Error
// ============================================================================

/// Failure raised by the transport before an HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TransportError {
    /// Network/connection errors (DNS, refused, reset).
    #[display("connection error: {_0}")]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    Tls(#[error(not(source))] String),

    /// The transport gave up waiting for the response.
    #[display("request timeout")]
    Timeout,

    /// The request could not be turned into a wire request.
    #[display("invalid request: {_0}")]
    InvalidRequest(#[error(not(source))] String),
}

impl TransportError {
    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

// ============================================================================
// Net Error
// ============================================================================

/// Language used by [`NetError::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English, same text as the `Display` implementation.
    #[default]
    English,
    /// Brazilian Portuguese.
    Portuguese,
}

/// Terminal classification of a failed fetch.
///
/// Status codes are checked in this order, first match wins:
///
/// | Status | Variant |
/// |--------|---------|
/// | 200..=299 | success, no error |
/// | 401 | [`NetError::Forbidden`] |
/// | 404 | [`NetError::NotFound`] |
/// | 500.. | [`NetError::ServerError`] |
/// | anything else | [`NetError::Unknown`] |
///
/// Transport failures become [`NetError::Fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NetError {
    /// The resource does not exist (404).
    #[display("page not found (HTTP {_0})")]
    NotFound(#[error(not(source))] u16),

    /// Access denied (401).
    #[display("access not allowed (HTTP {_0})")]
    Forbidden(#[error(not(source))] u16),

    /// The server failed to answer the request (5xx).
    #[display("server is not responding at the moment (HTTP {_0})")]
    ServerError(#[error(not(source))] u16),

    /// The request never produced an HTTP status.
    #[display("fatal error: {_0}")]
    Fatal(#[error(not(source))] String),

    /// A status the policy does not classify.
    #[display("unknown error (unclassified HTTP status {_0})")]
    Unknown(#[error(not(source))] u16),
}

impl NetError {
    /// Classify an HTTP status code.
    ///
    /// Returns `None` for 2xx statuses.
    ///
    /// # Example
    ///
    /// ```
    /// use loadparse_core::NetError;
    ///
    /// assert_eq!(NetError::from_status(204), None);
    /// assert_eq!(NetError::from_status(401), Some(NetError::Forbidden(401)));
    /// assert_eq!(NetError::from_status(503), Some(NetError::ServerError(503)));
    /// assert_eq!(NetError::from_status(403), Some(NetError::Unknown(403)));
    /// ```
    #[must_use]
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Forbidden(status)),
            404 => Some(Self::NotFound(status)),
            500.. => Some(Self::ServerError(status)),
            _ => Some(Self::Unknown(status)),
        }
    }

    /// Wrap a transport failure.
    #[must_use]
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal(message.into())
    }

    /// The HTTP status code, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(status)
            | Self::Forbidden(status)
            | Self::ServerError(status)
            | Self::Unknown(status) => Some(*status),
            Self::Fatal(_) => None,
        }
    }

    /// Returns `true` for [`NetError::Fatal`].
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// Human-readable description in the given language.
    #[must_use]
    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::English => self.to_string(),
            Locale::Portuguese => match self {
                Self::NotFound(status) => format!("Página não encontrada (Erro {status})"),
                Self::Forbidden(status) => format!("Acesso não permitido (Erro {status})"),
                Self::ServerError(status) => {
                    format!("Servidor não está respondendo no momento (Erro {status})")
                }
                Self::Fatal(message) => format!("Erro fatal: {message}"),
                Self::Unknown(status) => {
                    format!("Erro desconhecido (status HTTP {status} não classificado)")
                }
            },
        }
    }
}

impl From<TransportError> for NetError {
    fn from(err: TransportError) -> Self {
        Self::Fatal(err.to_string())
    }
}

// ============================================================================
// Parse Error
// ============================================================================

/// The payload is not a JSON array of objects.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The bytes are not valid JSON (includes truncated input).
    #[display("invalid JSON: {message}")]
    Syntax {
        /// Line of the error, 1-based.
        line: usize,
        /// Column of the error, 1-based.
        column: usize,
        /// Error message.
        message: String,
    },

    /// Valid JSON with the wrong shape.
    #[display("unexpected JSON shape at '{path}': {message}")]
    Shape {
        /// Location of the offending value (`.` for the top level, `[3]` for an element).
        path: String,
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Create a shape error.
    #[must_use]
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the bytes were not valid JSON.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    /// Returns `true` if the JSON was valid but not an array of objects.
    #[must_use]
    pub const fn is_shape(&self) -> bool {
        matches!(self, Self::Shape { .. })
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Pipeline Error
// ============================================================================

/// Error of the fetch-parse-decode pipeline.
#[derive(Debug, Clone, PartialEq, Display, Error, From)]
pub enum Error {
    /// The fetch failed.
    #[display("{_0}")]
    #[from]
    Net(NetError),

    /// The payload could not be parsed.
    #[display("{_0}")]
    #[from]
    Parse(ParseError),

    /// The URL was rejected before dispatch.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The fetch error, if the pipeline failed while fetching.
    #[must_use]
    pub const fn as_net(&self) -> Option<&NetError> {
        match self {
            Self::Net(err) => Some(err),
            _ => None,
        }
    }

    /// The parse error, if the payload was malformed.
    #[must_use]
    pub const fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }

    /// Human-readable description in the given language.
    ///
    /// Only fetch errors are translated.
    #[must_use]
    pub fn describe(&self, locale: Locale) -> String {
        match self {
            Self::Net(err) => err.describe(locale),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn status_success_range() {
        for status in [200, 201, 204, 250, 299] {
            check!(NetError::from_status(status).is_none());
        }
    }

    #[test]
    fn status_classified() {
        check!(NetError::from_status(401) == Some(NetError::Forbidden(401)));
        check!(NetError::from_status(404) == Some(NetError::NotFound(404)));
        check!(NetError::from_status(500) == Some(NetError::ServerError(500)));
        check!(NetError::from_status(503) == Some(NetError::ServerError(503)));
        check!(NetError::from_status(599) == Some(NetError::ServerError(599)));
        check!(NetError::from_status(999) == Some(NetError::ServerError(999)));
    }

    #[test]
    fn status_unclassified() {
        for status in [100, 101, 199, 300, 301, 304, 400, 402, 403, 405, 418, 429, 499] {
            check!(NetError::from_status(status) == Some(NetError::Unknown(status)));
        }
    }

    #[test]
    fn net_error_status() {
        check!(NetError::NotFound(404).status() == Some(404));
        check!(NetError::Unknown(302).status() == Some(302));
        check!(NetError::fatal("boom").status().is_none());
        check!(NetError::fatal("boom").is_fatal());
        check!(!NetError::ServerError(500).is_fatal());
    }

    #[test]
    fn net_error_display() {
        insta::assert_snapshot!(NetError::NotFound(404), @"page not found (HTTP 404)");
        insta::assert_snapshot!(NetError::Forbidden(401), @"access not allowed (HTTP 401)");
        insta::assert_snapshot!(
            NetError::ServerError(502),
            @"server is not responding at the moment (HTTP 502)"
        );
        insta::assert_snapshot!(
            NetError::fatal("connection reset"),
            @"fatal error: connection reset"
        );
        insta::assert_snapshot!(
            NetError::Unknown(302),
            @"unknown error (unclassified HTTP status 302)"
        );
    }

    #[test]
    fn net_error_describe_portuguese() {
        let locale = Locale::Portuguese;
        insta::assert_snapshot!(
            NetError::NotFound(404).describe(locale),
            @"Página não encontrada (Erro 404)"
        );
        insta::assert_snapshot!(
            NetError::Forbidden(401).describe(locale),
            @"Acesso não permitido (Erro 401)"
        );
        insta::assert_snapshot!(
            NetError::ServerError(500).describe(locale),
            @"Servidor não está respondendo no momento (Erro 500)"
        );
        insta::assert_snapshot!(
            NetError::fatal("timeout").describe(locale),
            @"Erro fatal: timeout"
        );
        insta::assert_snapshot!(
            NetError::Unknown(418).describe(locale),
            @"Erro desconhecido (status HTTP 418 não classificado)"
        );
    }

    #[test]
    fn net_error_describe_english_matches_display() {
        let err = NetError::ServerError(504);
        check!(err.describe(Locale::English) == err.to_string());
        check!(Locale::default() == Locale::English);
    }

    #[test]
    fn transport_error_becomes_fatal() {
        let err = NetError::from(TransportError::connection("refused"));
        check!(err == NetError::Fatal("connection error: refused".to_string()));

        let err = NetError::from(TransportError::Timeout);
        check!(err == NetError::Fatal("request timeout".to_string()));
        check!(TransportError::Timeout.is_timeout());
        check!(!TransportError::tls("bad cert").is_timeout());
    }

    #[test]
    fn parse_error_kinds() {
        let_assert!(Err(err) = serde_json::from_slice::<serde_json::Value>(b"[{\"id\": 1"));
        let err = ParseError::from(err);
        check!(err.is_syntax());
        check!(!err.is_shape());
        let_assert!(ParseError::Syntax { line, .. } = &err);
        check!(*line == 1);

        let err = ParseError::shape(".", "invalid type: map, expected a sequence");
        check!(err.is_shape());
        insta::assert_snapshot!(
            err,
            @"unexpected JSON shape at '.': invalid type: map, expected a sequence"
        );
    }

    #[test]
    fn pipeline_error_from() {
        let err = Error::from(NetError::NotFound(404));
        check!(err.as_net() == Some(&NetError::NotFound(404)));
        check!(err.as_parse().is_none());
        check!(err.to_string() == "page not found (HTTP 404)");
        check!(err.describe(Locale::Portuguese) == "Página não encontrada (Erro 404)");

        let_assert!(Err(url_err) = url::Url::parse("not a url"));
        let err = Error::from(url_err);
        check!(err.to_string().starts_with("invalid URL: "));
        check!(err.describe(Locale::Portuguese) == err.to_string());
    }
}
