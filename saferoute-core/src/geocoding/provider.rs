//! Geocoding provider trait and candidate type.

use async_trait::async_trait;

use crate::LatLng;

use super::error::GeocodingError;

/// One geocoding match.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    /// Matched coordinate.
    pub coordinate: LatLng,
    /// The service's formatted address for the match.
    pub formatted_label: String,
}

impl GeocodeCandidate {
    /// Construct a candidate.
    pub fn new(coordinate: LatLng, formatted_label: impl Into<String>) -> Self {
        Self {
            coordinate,
            formatted_label: formatted_label.into(),
        }
    }
}

/// Resolve an address into ranked candidates.
///
/// Implementations issue one service request per call and return the
/// candidates in the service's ranking order. An empty vector means the
/// address was not found; it is not an error.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use saferoute_core::{GeocodeCandidate, GeocodingError, GeocodingProvider, LatLng};
///
/// struct Fixed;
///
/// #[async_trait(?Send)]
/// impl GeocodingProvider for Fixed {
///     async fn geocode(&self, _address: &str) -> Result<Vec<GeocodeCandidate>, GeocodingError> {
///         Ok(vec![GeocodeCandidate::new(LatLng::new(28.6, 77.2), "Delhi")])
///     }
/// }
/// ```
#[async_trait(?Send)]
pub trait GeocodingProvider {
    /// Return candidates for `address`, best match first.
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocodingError>;
}
