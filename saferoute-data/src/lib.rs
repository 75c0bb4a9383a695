//! Network and file-backed providers for the route-safety engine.
//!
//! - [`geocoding::NominatimGeocoder`] resolves addresses through a
//!   Nominatim-compatible search API.
//! - [`routing::OsrmDirectionsProvider`] plans driving routes with OSRM's
//!   Route and Trip services.
//! - [`zones::JsonZoneSource`] loads a safety-zone feed from a JSON file.
//!
//! The HTTP providers are asynchronous and hold no runtime of their own;
//! drive them from the caller's Tokio runtime.

#![forbid(unsafe_code)]

mod error;
pub mod geocoding;
pub mod routing;
pub mod zones;

pub use error::ProviderBuildError;
pub use geocoding::{NominatimConfig, NominatimGeocoder};
pub use routing::{OsrmConfig, OsrmDirectionsProvider};
pub use zones::JsonZoneSource;

/// Default user agent for outbound requests.
pub const DEFAULT_USER_AGENT: &str = "saferoute-engine/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
