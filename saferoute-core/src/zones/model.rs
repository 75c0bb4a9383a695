//! Risk zone records and the risk → colour mapping.

use std::fmt;
use std::str::FromStr;

use crate::LatLng;

/// Three-tier risk classification attached to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Few or no recent incidents.
    Low,
    /// Some incidents; take care.
    Medium,
    /// Frequent incidents; avoid where possible.
    High,
}

impl RiskLevel {
    /// Lowercase identifier, as used in zone feeds.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Overlay badge text, e.g. `"HIGH RISK"`.
    #[must_use]
    pub const fn badge_label(self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Medium => "MEDIUM RISK",
            Self::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised risk level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised risk level {0:?}")]
pub struct ParseRiskLevelError(pub String);

impl FromStr for RiskLevel {
    type Err = ParseRiskLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseRiskLevelError(s.to_owned())),
        }
    }
}

/// Marker colour associated with a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskColor {
    /// Low risk.
    Green,
    /// Medium risk.
    Amber,
    /// High risk.
    Red,
    /// Anything unrecognised.
    Gray,
}

impl RiskColor {
    /// Hex colour used by the rendering surface.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10B981",
            Self::Amber => "#F59E0B",
            Self::Red => "#EF4444",
            Self::Gray => "#6B7280",
        }
    }
}

/// Map a risk level onto its marker colour.
///
/// # Examples
/// ```
/// use saferoute_core::{RiskColor, RiskLevel, risk_color};
///
/// assert_eq!(risk_color(RiskLevel::High), RiskColor::Red);
/// ```
#[must_use]
pub const fn risk_color(level: RiskLevel) -> RiskColor {
    match level {
        RiskLevel::Low => RiskColor::Green,
        RiskLevel::Medium => RiskColor::Amber,
        RiskLevel::High => RiskColor::Red,
    }
}

/// Map a raw risk label onto a colour, falling back to gray.
///
/// Total over every string. Matching is exact, so only the lowercase
/// labels `low`, `medium` and `high` get a risk colour; anything else,
/// including `"HIGH"` or `" low "`, yields [`RiskColor::Gray`].
///
/// # Examples
/// ```
/// use saferoute_core::{RiskColor, risk_color_for};
///
/// assert_eq!(risk_color_for("medium"), RiskColor::Amber);
/// assert_eq!(risk_color_for("extreme"), RiskColor::Gray);
/// ```
#[must_use]
pub fn risk_color_for(raw: &str) -> RiskColor {
    raw.parse::<RiskLevel>()
        .map_or(RiskColor::Gray, risk_color)
}

/// A geographic area with a known incident history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SafetyZone {
    /// Unique identifier within a registry.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Risk classification.
    pub risk_level: RiskLevel,
    /// Number of recent incidents.
    pub incidents: u32,
    /// Free-form "last updated" text, e.g. `"5 min ago"`.
    pub last_updated: String,
    /// Latitude of the zone centre.
    pub lat: f64,
    /// Longitude of the zone centre.
    pub lng: f64,
}

impl SafetyZone {
    /// Zone centre as a coordinate pair.
    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// Marker colour for this zone.
    #[must_use]
    pub const fn color(&self) -> RiskColor {
        risk_color(self.risk_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("low", RiskColor::Green)]
    #[case("medium", RiskColor::Amber)]
    #[case("high", RiskColor::Red)]
    #[case("HIGH", RiskColor::Gray)]
    #[case(" low ", RiskColor::Gray)]
    #[case("Medium", RiskColor::Gray)]
    #[case("unknown", RiskColor::Gray)]
    #[case("", RiskColor::Gray)]
    fn risk_color_for_is_total(#[case] raw: &str, #[case] expected: RiskColor) {
        assert_eq!(risk_color_for(raw), expected);
    }

    #[rstest]
    fn colours_have_distinct_hex_values() {
        let hexes = [
            RiskColor::Green.hex(),
            RiskColor::Amber.hex(),
            RiskColor::Red.hex(),
            RiskColor::Gray.hex(),
        ];
        for (i, a) in hexes.iter().enumerate() {
            for b in hexes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[rstest]
    #[case("High")]
    #[case(" medium")]
    fn parse_is_case_and_space_sensitive(#[case] raw: &str) {
        assert!(raw.parse::<RiskLevel>().is_err());
    }

    #[rstest]
    fn parse_rejects_unknown_levels() {
        let err = "severe".parse::<RiskLevel>().expect_err("should not parse");
        assert_eq!(err, ParseRiskLevelError("severe".to_owned()));
    }

    #[rstest]
    #[case(RiskLevel::Low, "LOW RISK")]
    #[case(RiskLevel::High, "HIGH RISK")]
    fn badge_labels_are_uppercase(#[case] level: RiskLevel, #[case] label: &str) {
        assert_eq!(level.badge_label(), label);
    }
}
