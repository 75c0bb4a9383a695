//! Nominatim search response types.
//!
//! Nominatim returns coordinates as decimal strings.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use saferoute_core::{GeocodeCandidate, GeocodingError, LatLng};
use serde::Deserialize;

/// One entry of a `format=jsonv2` search response.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    /// Latitude as a decimal string.
    pub lat: String,
    /// Longitude as a decimal string.
    pub lon: String,
    /// Full formatted address.
    pub display_name: String,
}

impl SearchHit {
    /// Convert into a candidate, validating the coordinate.
    pub fn into_candidate(self) -> Result<GeocodeCandidate, GeocodingError> {
        let lat = parse_degrees(&self.lat, "lat")?;
        let lng = parse_degrees(&self.lon, "lon")?;
        let coordinate = LatLng::new(lat, lng);
        if !coordinate.is_valid() {
            return Err(GeocodingError::ParseError {
                message: format!("coordinate {lat},{lng} is out of range"),
            });
        }
        Ok(GeocodeCandidate::new(coordinate, self.display_name))
    }
}

fn parse_degrees(raw: &str, field: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|err| GeocodingError::ParseError {
            message: format!("invalid {field} {raw:?}: {err}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialise_search_response() {
        let json = r#"[{
            "place_id": 1,
            "lat": "28.6314022",
            "lon": "77.2193791",
            "display_name": "Connaught Place, New Delhi, Delhi, India",
            "importance": 0.6
        }]"#;

        let hits: Vec<SearchHit> = serde_json::from_str(json).expect("should deserialise");
        let candidate = hits
            .into_iter()
            .next()
            .expect("one hit")
            .into_candidate()
            .expect("valid hit");

        assert_eq!(candidate.coordinate, LatLng::new(28.631_402_2, 77.219_379_1));
        assert_eq!(
            candidate.formatted_label,
            "Connaught Place, New Delhi, Delhi, India"
        );
    }

    #[rstest]
    #[case("north", "77.2")]
    #[case("95.0", "77.2")]
    fn rejects_bad_coordinates(#[case] lat: &str, #[case] lon: &str) {
        let hit = SearchHit {
            lat: lat.to_owned(),
            lon: lon.to_owned(),
            display_name: "Somewhere".to_owned(),
        };
        assert!(matches!(
            hit.into_candidate(),
            Err(GeocodingError::ParseError { .. })
        ));
    }
}
