//! Property checks for [`ZoneExposureScorer`].

use std::time::Duration;

use geo::LineString;
use proptest::prelude::*;
use saferoute_core::{PlannedRoute, RouteScorer, SafetyZoneRegistry};
use saferoute_scorer::{ExposureWeights, ZoneExposureScorer};

fn delhi_coord() -> impl Strategy<Value = (f64, f64)> {
    (77.15_f64..77.30, 28.50_f64..28.70)
}

proptest! {
    #[test]
    fn score_stays_in_range(coords in prop::collection::vec(delhi_coord(), 0..8)) {
        let route =
            PlannedRoute::new(LineString::from(coords), 1_000.0, Duration::from_secs(60), 0);
        let registry = SafetyZoneRegistry::reference();
        let info = ZoneExposureScorer::default().score(&route, registry.zones());
        prop_assert!(info.safety_score.value() <= 100);
    }

    #[test]
    fn zero_scale_is_always_perfect(coords in prop::collection::vec(delhi_coord(), 0..8)) {
        let route =
            PlannedRoute::new(LineString::from(coords), 1_000.0, Duration::from_secs(60), 0);
        let registry = SafetyZoneRegistry::reference();
        let scorer = ZoneExposureScorer::new(ExposureWeights {
            penalty_scale: 0.0,
            ..ExposureWeights::default()
        });
        prop_assert!(scorer.is_ok());
        if let Ok(scorer) = scorer {
            prop_assert_eq!(scorer.score(&route, registry.zones()).safety_score.value(), 100);
        }
    }
}
