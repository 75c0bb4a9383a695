//! HTTP geocoding through a Nominatim-compatible search API.
//!
//! ```no_run
//! use std::time::Duration;
//! use saferoute_core::GeocodingProvider;
//! use saferoute_data::geocoding::{NominatimConfig, NominatimGeocoder};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NominatimConfig::new("https://nominatim.openstreetmap.org")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let geocoder = NominatimGeocoder::with_config(config)?;
//! let candidates = geocoder.geocode("Connaught Place, Delhi").await?;
//! # Ok(())
//! # }
//! ```

mod nominatim;
mod response;

pub use nominatim::{DEFAULT_NOMINATIM_URL, NominatimConfig, NominatimGeocoder};
