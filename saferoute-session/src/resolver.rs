//! Address → coordinate resolution.

use std::rc::Rc;

use log::{debug, warn};
use saferoute_core::{GeocodingProvider, RoutePoint};

/// Resolve free-text addresses through a [`GeocodingProvider`].
///
/// Failures never propagate: an empty address, a provider error and an empty
/// result set all yield `None`, with provider problems logged. Every call is
/// a fresh provider round trip; nothing is cached or retried.
#[derive(Clone)]
pub struct AddressResolver {
    geocoder: Rc<dyn GeocodingProvider>,
}

impl std::fmt::Debug for AddressResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressResolver")
            .field("geocoder", &"<dyn GeocodingProvider>")
            .finish()
    }
}

impl AddressResolver {
    /// Wrap a geocoding provider.
    #[must_use]
    pub fn new(geocoder: Rc<dyn GeocodingProvider>) -> Self {
        Self { geocoder }
    }

    /// Resolve `address` to the provider's best match.
    pub async fn resolve(&self, address: &str) -> Option<RoutePoint> {
        if address.trim().is_empty() {
            debug!("skipping geocode of empty address");
            return None;
        }

        let candidates = match self.geocoder.geocode(address).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!("geocoding {address:?} failed: {err}");
                return None;
            }
        };

        let Some(best) = candidates.into_iter().next() else {
            warn!("geocoding {address:?} returned no results");
            return None;
        };

        Some(RoutePoint::new(
            best.coordinate.lat,
            best.coordinate.lng,
            best.formatted_label,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::block_on;
    use rstest::rstest;
    use saferoute_core::test_support::StubGeocoder;
    use saferoute_core::{GeocodeCandidate, GeocodingError, LatLng};

    fn resolver(geocoder: &Rc<StubGeocoder>) -> AddressResolver {
        AddressResolver::new(Rc::clone(geocoder) as Rc<dyn GeocodingProvider>)
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_addresses_make_no_calls(#[case] address: &str) {
        let geocoder = Rc::new(StubGeocoder::new());
        assert_eq!(block_on(resolver(&geocoder).resolve(address)), None);
        assert_eq!(geocoder.calls(), 0);
    }

    #[rstest]
    fn takes_the_first_candidate() {
        let geocoder = Rc::new(StubGeocoder::new().with_candidates(
            "Delhi",
            vec![
                GeocodeCandidate::new(LatLng::new(28.61, 77.20), "New Delhi, India"),
                GeocodeCandidate::new(LatLng::new(28.70, 77.10), "Delhi Cantonment"),
            ],
        ));
        let point = block_on(resolver(&geocoder).resolve("Delhi")).expect("resolves");
        assert_eq!(point, RoutePoint::new(28.61, 77.20, "New Delhi, India"));
        assert_eq!(geocoder.calls(), 1);
    }

    #[rstest]
    fn provider_errors_become_none() {
        let geocoder = Rc::new(StubGeocoder::new().with_error(
            "Delhi",
            GeocodingError::NetworkError {
                url: "http://example.com/search".to_owned(),
                message: "connection refused".to_owned(),
            },
        ));
        assert_eq!(block_on(resolver(&geocoder).resolve("Delhi")), None);
        assert_eq!(geocoder.calls(), 1);
    }

    #[rstest]
    fn empty_results_become_none() {
        let geocoder = Rc::new(StubGeocoder::new());
        assert_eq!(block_on(resolver(&geocoder).resolve("Atlantis")), None);
    }

    #[rstest]
    fn every_call_reaches_the_provider() {
        let geocoder = Rc::new(StubGeocoder::new().with_match("Delhi", 28.6, 77.2, "Delhi"));
        let resolver = resolver(&geocoder);
        block_on(async {
            resolver.resolve("Delhi").await;
            resolver.resolve("Delhi").await;
        });
        assert_eq!(geocoder.calls(), 2);
    }
}
