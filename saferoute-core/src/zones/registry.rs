//! Read-only registry of safety zones and the sources that seed it.

use std::collections::HashSet;

use super::error::ZoneSourceError;
use super::model::{RiskLevel, SafetyZone};

/// Supplies the zone set a registry is built from.
///
/// Sources are consulted once, when the registry is constructed. A source
/// backed by a remote feed can be swapped in without touching callers.
///
/// # Examples
///
/// ```rust
/// use saferoute_core::{ReferenceZones, SafetyZoneRegistry};
///
/// let registry = SafetyZoneRegistry::from_source(&ReferenceZones)?;
/// assert_eq!(registry.zones().len(), 6);
/// # Ok::<(), saferoute_core::ZoneSourceError>(())
/// ```
pub trait ZoneSource {
    /// Produce the full, ordered zone set.
    fn load(&self) -> Result<Vec<SafetyZone>, ZoneSourceError>;
}

/// Built-in sample zones covering central Delhi.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceZones;

impl ReferenceZones {
    /// The reference dataset as owned records.
    #[must_use]
    pub fn zones() -> Vec<SafetyZone> {
        [
            ("1", "Connaught Place", RiskLevel::Low, 2, "5 min ago", 28.6315, 77.2167),
            ("2", "Karol Bagh", RiskLevel::Low, 1, "12 min ago", 28.6519, 77.1909),
            ("3", "Lajpat Nagar", RiskLevel::Medium, 8, "3 min ago", 28.5665, 77.2431),
            ("4", "Paharganj", RiskLevel::High, 15, "1 min ago", 28.6433, 77.2167),
            ("5", "Khan Market", RiskLevel::Low, 0, "8 min ago", 28.5984, 77.2319),
            ("6", "Chandni Chowk", RiskLevel::Medium, 4, "6 min ago", 28.6506, 77.2301),
        ]
        .into_iter()
        .map(
            |(id, name, risk_level, incidents, last_updated, lat, lng)| SafetyZone {
                id: id.to_owned(),
                name: name.to_owned(),
                risk_level,
                incidents,
                last_updated: last_updated.to_owned(),
                lat,
                lng,
            },
        )
        .collect()
    }
}

impl ZoneSource for ReferenceZones {
    fn load(&self) -> Result<Vec<SafetyZone>, ZoneSourceError> {
        Ok(Self::zones())
    }
}

/// Parse a JSON array of zones using camelCase keys.
///
/// # Errors
///
/// Returns [`ZoneSourceError::Parse`] when the payload is not a zone array.
#[cfg(feature = "serde")]
pub fn zones_from_json(payload: &str) -> Result<Vec<SafetyZone>, ZoneSourceError> {
    Ok(serde_json::from_str(payload)?)
}

/// Immutable, validated set of safety zones.
#[derive(Debug, Clone, Default)]
pub struct SafetyZoneRegistry {
    zones: Vec<SafetyZone>,
}

impl SafetyZoneRegistry {
    /// Build a registry from `source`, validating every zone.
    ///
    /// # Errors
    ///
    /// Returns an error when the source fails, when an id is empty or
    /// repeated, or when a zone centre is not a valid coordinate.
    pub fn from_source(source: &dyn ZoneSource) -> Result<Self, ZoneSourceError> {
        Self::new(source.load()?)
    }

    /// Build a registry from an explicit zone list.
    ///
    /// # Errors
    ///
    /// See [`SafetyZoneRegistry::from_source`].
    pub fn new(zones: Vec<SafetyZone>) -> Result<Self, ZoneSourceError> {
        let mut seen = HashSet::with_capacity(zones.len());
        for (index, zone) in zones.iter().enumerate() {
            if zone.id.trim().is_empty() {
                return Err(ZoneSourceError::EmptyId { index });
            }
            if !zone.position().is_valid() {
                return Err(ZoneSourceError::InvalidPosition {
                    id: zone.id.clone(),
                    lat: zone.lat,
                    lng: zone.lng,
                });
            }
            if !seen.insert(zone.id.as_str()) {
                return Err(ZoneSourceError::DuplicateId {
                    id: zone.id.clone(),
                });
            }
        }
        Ok(Self { zones })
    }

    /// Registry seeded with [`ReferenceZones`].
    #[must_use]
    pub fn reference() -> Self {
        Self {
            zones: ReferenceZones::zones(),
        }
    }

    /// All zones in source order.
    #[must_use]
    pub fn zones(&self) -> &[SafetyZone] {
        &self.zones
    }

    /// Look up a zone by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SafetyZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Number of zones held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the registry holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
