//! Best-effort device position queries.
//!
//! Geolocation is never on the critical path: failures are expected and
//! callers fall back to a default map centre.

mod error;
mod provider;

pub use error::GeolocationError;
pub use provider::{
    DEFAULT_LOCATION_MAX_AGE, DEFAULT_LOCATION_TIMEOUT, GeolocationProvider, Position,
    PositionOptions,
};
