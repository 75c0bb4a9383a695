//! Core domain types for the SafeRoute engine.
//!
//! The crate defines the data model shared by every other crate: resolved
//! [`RoutePoint`]s, the static [`SafetyZoneRegistry`], planned routes and
//! their [`RouteInfo`] summaries. External services sit behind small async
//! provider traits ([`GeocodingProvider`], [`DirectionsProvider`],
//! [`GeolocationProvider`]) so that orchestration code can be tested with the
//! deterministic doubles in `test_support`.
//!
//! Providers are `?Send`: the engine runs on a single-threaded cooperative
//! scheduler and shares providers through `Rc`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod directions;
pub mod geocoding;
pub mod geolocation;
mod icon;
mod options;
mod point;
mod scorer;
pub mod zones;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use directions::{
    DirectionsError, DirectionsProvider, DirectionsRequest, PlannedRoute, TravelMode,
};
pub use geocoding::{GeocodeCandidate, GeocodingError, GeocodingProvider};
pub use geolocation::{
    DEFAULT_LOCATION_MAX_AGE, DEFAULT_LOCATION_TIMEOUT, GeolocationError, GeolocationProvider,
    Position, PositionOptions,
};
pub use icon::{Glyph, IconDescriptor, MarkerKind, ROUTE_STYLE, RouteStyle, icon_for};
pub use options::{DisplaySizeClass, RouteWidgetOptions};
pub use point::{LatLng, RoutePoint};
pub use scorer::{
    BadgeTier, MODERATE_THRESHOLD, RouteInfo, RouteScorer, SAFE_THRESHOLD, SafetyBadge,
    SafetyScore, SampleRouteScorer, badge, format_distance, format_duration,
};
#[cfg(feature = "serde")]
pub use zones::zones_from_json;
pub use zones::{
    ParseRiskLevelError, ReferenceZones, RiskColor, RiskLevel, SafetyZone, SafetyZoneRegistry,
    ZoneSource, ZoneSourceError, risk_color, risk_color_for,
};
