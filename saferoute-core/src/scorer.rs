//! Summarise a planned route's risk exposure.
//!
//! The [`RouteScorer`] trait turns a [`PlannedRoute`] and the active
//! [`SafetyZone`] set into a [`RouteInfo`]. [`badge`] classifies the
//! resulting [`SafetyScore`] for display.

use std::fmt;
use std::time::Duration;

use crate::{PlannedRoute, SafetyZone};

/// Aggregate route safety on a `0..=100` scale; higher is safer.
///
/// Construction clamps, so a `SafetyScore` is always in range.
///
/// # Examples
///
/// ```rust
/// use saferoute_core::SafetyScore;
///
/// assert_eq!(SafetyScore::new(140).value(), 100);
/// assert_eq!(SafetyScore::from_f64(-3.2).value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct SafetyScore(u8);

impl SafetyScore {
    /// Highest possible score.
    pub const MAX: Self = Self(100);
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Clamp `value` into range.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > 100 { Self::MAX } else { Self(value) }
    }

    /// Round and clamp a real-valued score; non-finite input yields zero.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::MIN;
        }
        // Clamped to 0..=100, so the cast is exact.
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// The raw score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Display badge for this score.
    #[must_use]
    pub const fn badge(self) -> SafetyBadge {
        badge(self)
    }
}

impl From<u8> for SafetyScore {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<SafetyScore> for u8 {
    fn from(value: SafetyScore) -> Self {
        value.0
    }
}

impl fmt::Display for SafetyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Summary metrics shown alongside a planned route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteInfo {
    /// Display distance, e.g. `"12.5 km"`.
    pub distance: String,
    /// Display duration, e.g. `"28 mins"`.
    pub duration: String,
    /// Aggregate safety score.
    pub safety_score: SafetyScore,
    /// Number of alternative routes available.
    pub alternative_routes: u32,
}

impl RouteInfo {
    /// Badge for this route's score.
    #[must_use]
    pub const fn badge(&self) -> SafetyBadge {
        badge(self.safety_score)
    }
}

/// Tier of a [`SafetyBadge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BadgeTier {
    /// Score below 60.
    High,
    /// Score from 60 up to but excluding 80.
    Moderate,
    /// Score of 80 or more.
    Safe,
}

/// Display classification of a safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SafetyBadge {
    /// Badge text.
    pub label: &'static str,
    /// Badge tier.
    pub tier: BadgeTier,
}

/// Score at or above which a route is labelled safe.
pub const SAFE_THRESHOLD: u8 = 80;
/// Score at or above which a route is labelled moderate.
pub const MODERATE_THRESHOLD: u8 = 60;

/// Classify a score into one of three badges.
///
/// # Examples
///
/// ```rust
/// use saferoute_core::{BadgeTier, SafetyScore, badge};
///
/// assert_eq!(badge(SafetyScore::new(80)).label, "SAFE ROUTE");
/// assert_eq!(badge(SafetyScore::new(60)).tier, BadgeTier::Moderate);
/// assert_eq!(badge(SafetyScore::new(59)).label, "HIGH RISK");
/// ```
#[must_use]
pub const fn badge(score: SafetyScore) -> SafetyBadge {
    let value = score.value();
    if value >= SAFE_THRESHOLD {
        SafetyBadge {
            label: "SAFE ROUTE",
            tier: BadgeTier::Safe,
        }
    } else if value >= MODERATE_THRESHOLD {
        SafetyBadge {
            label: "MODERATE RISK",
            tier: BadgeTier::Moderate,
        }
    } else {
        SafetyBadge {
            label: "HIGH RISK",
            tier: BadgeTier::High,
        }
    }
}

/// Derive [`RouteInfo`] for a route given the known risk zones.
///
/// Implementations must be deterministic for a given input so that session
/// state can be reproduced in tests.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geo::line_string;
/// use saferoute_core::{PlannedRoute, RouteScorer, SampleRouteScorer};
///
/// let route = PlannedRoute::new(
///     line_string![(x: 77.21, y: 28.63), (x: 77.24, y: 28.56)],
///     9_000.0,
///     Duration::from_secs(900),
///     0,
/// );
/// let info = SampleRouteScorer.score(&route, &[]);
/// assert_eq!(info.safety_score.value(), 87);
/// ```
pub trait RouteScorer {
    /// Score `route` against `zones`.
    fn score(&self, route: &PlannedRoute, zones: &[SafetyZone]) -> RouteInfo;
}

/// Scorer that returns fixed sample metrics regardless of input.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleRouteScorer;

impl SampleRouteScorer {
    /// The fixed metrics reported for every route.
    #[must_use]
    pub fn sample() -> RouteInfo {
        RouteInfo {
            distance: "12.5 km".to_owned(),
            duration: "28 mins".to_owned(),
            safety_score: SafetyScore::new(87),
            alternative_routes: 3,
        }
    }
}

impl RouteScorer for SampleRouteScorer {
    fn score(&self, _route: &PlannedRoute, _zones: &[SafetyZone]) -> RouteInfo {
        Self::sample()
    }
}

/// Format a distance in metres as kilometres with one decimal place.
#[must_use]
pub fn format_distance(metres: f64) -> String {
    format!("{:.1} km", metres.max(0.0) / 1000.0)
}

/// Format a duration as whole minutes, rounding to nearest and never below one.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs().saturating_add(30);
    let minutes = (secs / 60).max(1);
    format!("{minutes} mins")
}
