use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request could not reach the service.
    #[error("network error calling {url}: {message}")]
    NetworkError {
        /// Request URL.
        url: String,
        /// Underlying error message.
        message: String,
    },
    /// The service did not answer within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with status {status}: {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response or error text.
        message: String,
    },
    /// The service reported a routing failure.
    #[error("directions service error {code}: {message}")]
    ServiceError {
        /// Service status code, e.g. `"NoRoute"`.
        code: String,
        /// Service message.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse directions response: {message}")]
    ParseError {
        /// Decoder message.
        message: String,
    },
}
