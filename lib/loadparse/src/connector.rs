//! HTTPS connector using rustls.

use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;

use crate::ClientConfig;

/// Create an HTTPS connector honoring the configured connect timeout.
///
/// Plain `http://` URLs are still accepted. TLS trusts the Mozilla root
/// certificates, HTTP/1.1 and HTTP/2 are negotiated through ALPN.
#[must_use]
pub fn https_connector(config: &ClientConfig) -> HttpsConnector<HttpConnector> {
    let mut tcp = HttpConnector::new();
    tcp.enforce_http(false);
    tcp.set_connect_timeout(Some(config.connect_timeout));

    let roots: rustls::RootCertStore = webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();
    let tls = rustls::ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();

    HttpsConnectorBuilder::new()
        .with_tls_config(tls)
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .wrap_connector(tcp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_connector_from_config() {
        let _connector = https_connector(&ClientConfig::default());
    }
}
