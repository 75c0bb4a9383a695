//! Turn free-text addresses into coordinates.
//!
//! The [`GeocodingProvider`] trait abstracts an external geocoding service.
//! Callers supply an address and receive the service's candidates, best
//! match first. Providers may fail or return no candidates at all.

mod error;
mod provider;

pub use error::GeocodingError;
pub use provider::{GeocodeCandidate, GeocodingProvider};
