//! Errors shared by the HTTP providers.

use std::time::Duration;

use saferoute_core::{DirectionsError, GeocodingError};
use thiserror::Error;

/// A provider could not be built from its configuration.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The HTTP client rejected its settings.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
}

/// Parse `base_url`, making sure it ends with a slash so that relative
/// service paths are appended rather than replacing the last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<url::Url, ProviderBuildError> {
    let normalised = if base_url.ends_with('/') {
        base_url.to_owned()
    } else {
        format!("{base_url}/")
    };
    url::Url::parse(&normalised).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

/// Provider error types that can describe a failed HTTP exchange.
pub(crate) trait TransportError {
    fn timeout(url: String, timeout_secs: u64) -> Self;
    fn http(url: String, status: u16, message: String) -> Self;
    fn network(url: String, message: String) -> Self;
}

impl TransportError for DirectionsError {
    fn timeout(url: String, timeout_secs: u64) -> Self {
        Self::Timeout { url, timeout_secs }
    }

    fn http(url: String, status: u16, message: String) -> Self {
        Self::HttpError {
            url,
            status,
            message,
        }
    }

    fn network(url: String, message: String) -> Self {
        Self::NetworkError { url, message }
    }
}

impl TransportError for GeocodingError {
    fn timeout(url: String, timeout_secs: u64) -> Self {
        Self::Timeout { url, timeout_secs }
    }

    fn http(url: String, status: u16, message: String) -> Self {
        Self::HttpError {
            url,
            status,
            message,
        }
    }

    fn network(url: String, message: String) -> Self {
        Self::NetworkError { url, message }
    }
}

/// Classify a reqwest failure for `url` as a timeout, an HTTP status error
/// or a network error.
pub(crate) fn convert_reqwest_error<E: TransportError>(
    error: &reqwest::Error,
    url: &str,
    timeout: Duration,
) -> E {
    if error.is_timeout() {
        return E::timeout(url.to_owned(), timeout.as_secs());
    }
    if let Some(status) = error.status() {
        return E::http(url.to_owned(), status.as_u16(), error.to_string());
    }
    E::network(url.to_owned(), error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::net::TcpListener;

    fn request_error(url: &str, timeout: Duration) -> reqwest::Error {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime should build");
        runtime.block_on(async {
            reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("client should build")
                .get(url)
                .send()
                .await
                .expect_err("request should fail")
        })
    }

    #[rstest]
    fn silent_server_is_a_timeout() {
        // Accepted by the backlog but never answered.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let url = format!("http://{}/route", listener.local_addr().expect("local addr"));
        let err = request_error(&url, Duration::from_millis(100));
        let converted: DirectionsError = convert_reqwest_error(&err, &url, Duration::from_secs(7));
        assert_eq!(
            converted,
            DirectionsError::Timeout {
                url,
                timeout_secs: 7
            }
        );
    }

    #[rstest]
    fn refused_connection_is_a_network_error() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("free port");
        let url = format!("http://{addr}/search");
        let err = request_error(&url, Duration::from_secs(5));
        let converted: GeocodingError = convert_reqwest_error(&err, &url, Duration::from_secs(5));
        assert!(matches!(converted, GeocodingError::NetworkError { url: ref u, .. } if *u == url));
    }

    #[rstest]
    #[case("http://localhost:5000", "http://localhost:5000/")]
    #[case("https://nominatim.example.org/api/", "https://nominatim.example.org/api/")]
    #[case("https://nominatim.example.org/api", "https://nominatim.example.org/api/")]
    fn base_urls_gain_a_trailing_slash(#[case] raw: &str, #[case] expected: &str) {
        let url = parse_base_url(raw).expect("valid URL");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn relative_urls_are_rejected() {
        let err = parse_base_url("localhost").expect_err("not absolute");
        assert!(matches!(err, ProviderBuildError::InvalidBaseUrl { .. }));
    }
}
