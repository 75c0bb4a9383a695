//! Facade crate for the SafeRoute advisory engine.
//!
//! This crate re-exports the core domain types and the session coordinator,
//! and exposes the exposure scorer and HTTP providers behind feature flags.

#![forbid(unsafe_code)]

pub use saferoute_core::{
    BadgeTier, DirectionsError, DirectionsProvider, DirectionsRequest, GeocodeCandidate,
    GeocodingError, GeocodingProvider, GeolocationError, GeolocationProvider, LatLng,
    PlannedRoute, Position, PositionOptions, RiskColor, RiskLevel, RouteInfo, RoutePoint,
    RouteScorer, RouteWidgetOptions, SafetyBadge, SafetyScore, SafetyZone, SafetyZoneRegistry,
    SampleRouteScorer, ZoneSource, ZoneSourceError, badge, risk_color,
};

pub use saferoute_session::{
    Phase, ProviderInitError, RequestCoordinator, SessionState, SubmitError, SubmitOutcome,
};

#[cfg(feature = "serde")]
pub use saferoute_core::zones_from_json;

#[cfg(feature = "scorer-exposure")]
pub use saferoute_scorer::{ExposureWeights, ZoneExposure, ZoneExposureScorer};

#[cfg(feature = "providers-http")]
pub use saferoute_data::{
    JsonZoneSource, NominatimConfig, NominatimGeocoder, OsrmConfig, OsrmDirectionsProvider,
    ProviderBuildError,
};

/// Stub providers for tests.
#[cfg(feature = "test-support")]
pub use saferoute_core::test_support;
