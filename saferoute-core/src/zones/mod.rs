//! Static risk-zone reference data.
//!
//! A [`SafetyZoneRegistry`] is built once from a [`ZoneSource`] and is
//! read-only afterwards. The pure [`risk_color`] mapping turns a
//! [`RiskLevel`] into the colour the rendering surface uses for markers.

mod error;
mod model;
mod registry;

pub use error::ZoneSourceError;
pub use model::{
    ParseRiskLevelError, RiskColor, RiskLevel, SafetyZone, risk_color, risk_color_for,
};
#[cfg(feature = "serde")]
pub use registry::zones_from_json;
pub use registry::{ReferenceZones, SafetyZoneRegistry, ZoneSource};
