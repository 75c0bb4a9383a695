//! Zone exposure scoring for planned routes.
//!
//! [`ZoneExposureScorer`] penalises a route for every safety zone it passes
//! near. A zone within the influence radius contributes
//! `tier_weight × (1 + incidents) × (1 − d / radius)`, where `d` is the
//! great-circle distance from the zone centre to the closest point of the
//! route. The summed contributions, times the penalty scale, are taken off
//! a perfect score of 100.
//!
//! ```rust
//! use saferoute_core::{RouteScorer, SafetyZoneRegistry};
//! use saferoute_core::test_support::sample_route;
//! use saferoute_scorer::ZoneExposureScorer;
//!
//! let registry = SafetyZoneRegistry::reference();
//! let info = ZoneExposureScorer::default().score(&sample_route(), registry.zones());
//! assert_eq!(info.distance, "12.5 km");
//! assert!(info.safety_score.value() < 60);
//! ```

#![forbid(unsafe_code)]

mod geometry;
mod weights;

use log::debug;
use saferoute_core::{
    PlannedRoute, RouteInfo, RouteScorer, SafetyScore, SafetyZone, format_distance,
    format_duration,
};

pub use geometry::{EARTH_RADIUS_M, distance_to_path, haversine_m};
pub use weights::{DEFAULT_PENALTY_SCALE, DEFAULT_RADIUS_M, ExposureWeights, WeightsError};

/// How much one zone weighs on a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ZoneExposure {
    /// Zone id.
    pub zone_id: String,
    /// Distance from the zone centre to the route, in metres.
    pub distance_m: f64,
    /// Unscaled penalty contribution; zero outside the radius.
    pub contribution: f64,
}

/// Scores routes by their proximity to risky zones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneExposureScorer {
    weights: ExposureWeights,
}

impl ZoneExposureScorer {
    /// Build a scorer with custom weights.
    ///
    /// # Errors
    ///
    /// Returns [`WeightsError`] if any weight is invalid.
    pub fn new(weights: ExposureWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ExposureWeights {
        &self.weights
    }

    /// Per-zone breakdown for `route`, in zone order.
    ///
    /// Zones are omitted only when the route has no geometry.
    #[must_use]
    pub fn exposures(&self, route: &PlannedRoute, zones: &[SafetyZone]) -> Vec<ZoneExposure> {
        zones
            .iter()
            .filter_map(|zone| {
                let distance_m = distance_to_path(zone.position(), &route.path)?;
                Some(ZoneExposure {
                    zone_id: zone.id.clone(),
                    distance_m,
                    contribution: self.contribution(zone, distance_m),
                })
            })
            .collect()
    }

    /// Score deduction for `route`, before clamping.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "penalty aggregation")]
    pub fn penalty(&self, route: &PlannedRoute, zones: &[SafetyZone]) -> f64 {
        let total: f64 = self
            .exposures(route, zones)
            .iter()
            .map(|exposure| exposure.contribution)
            .sum();
        total * self.weights.penalty_scale
    }

    #[expect(clippy::float_arithmetic, reason = "linear distance falloff")]
    fn contribution(&self, zone: &SafetyZone, distance_m: f64) -> f64 {
        let radius = self.weights.radius_m;
        if distance_m >= radius {
            return 0.0;
        }
        let falloff = 1.0 - distance_m / radius;
        self.weights.tier_weight(zone.risk_level) * (1.0 + f64::from(zone.incidents)) * falloff
    }
}

impl RouteScorer for ZoneExposureScorer {
    #[expect(clippy::float_arithmetic, reason = "score is 100 minus penalty")]
    fn score(&self, route: &PlannedRoute, zones: &[SafetyZone]) -> RouteInfo {
        let penalty = self.penalty(route, zones);
        let safety_score = SafetyScore::from_f64(100.0 - penalty);
        debug!("route penalty {penalty:.2} over {} zones -> {safety_score}", zones.len());
        RouteInfo {
            distance: format_distance(route.distance_m),
            duration: format_duration(route.duration),
            safety_score,
            alternative_routes: route.alternatives,
        }
    }
}
