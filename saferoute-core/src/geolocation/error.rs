use std::time::Duration;

use thiserror::Error;

/// Errors from [`crate::geolocation::GeolocationProvider::current_position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The user or platform refused access to the position.
    #[error("location permission denied")]
    PermissionDenied,
    /// The platform could not determine a position.
    #[error("position unavailable: {message}")]
    Unavailable {
        /// Platform message.
        message: String,
    },
    /// No position arrived within the requested timeout.
    #[error("position request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },
    /// The position returned was older than the accepted maximum age.
    #[error("position is {age:?} old, older than the accepted {max_age:?}")]
    Stale {
        /// Age of the returned fix.
        age: Duration,
        /// Maximum accepted age.
        max_age: Duration,
    },
}
