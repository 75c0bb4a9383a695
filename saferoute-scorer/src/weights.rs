//! Tunable parameters of the exposure model.

use saferoute_core::RiskLevel;
use thiserror::Error;

/// Default radius within which a zone affects a route, in metres.
pub const DEFAULT_RADIUS_M: f64 = 750.0;

/// Default multiplier applied to the summed zone contributions.
pub const DEFAULT_PENALTY_SCALE: f64 = 1.5;

/// Weights that turn zone proximity into a score penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExposureWeights {
    /// Zones farther than this from the route are ignored.
    pub radius_m: f64,
    /// Weight of a low-risk zone.
    pub low: f64,
    /// Weight of a medium-risk zone.
    pub medium: f64,
    /// Weight of a high-risk zone.
    pub high: f64,
    /// Multiplier from summed contributions to score points.
    pub penalty_scale: f64,
}

impl Default for ExposureWeights {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            low: 1.0,
            medium: 3.0,
            high: 6.0,
            penalty_scale: DEFAULT_PENALTY_SCALE,
        }
    }
}

/// Rejected [`ExposureWeights`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// The radius must be finite and positive.
    #[error("influence radius must be a positive number of metres, got {radius_m}")]
    InvalidRadius {
        /// The rejected radius.
        radius_m: f64,
    },
    /// Weights and scale must be finite and non-negative.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ExposureWeights {
    /// Tier weight for `level`.
    #[must_use]
    pub const fn tier_weight(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`WeightsError`] naming the first invalid parameter.
    pub fn validate(&self) -> Result<(), WeightsError> {
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(WeightsError::InvalidRadius {
                radius_m: self.radius_m,
            });
        }
        for (name, value) in [
            ("low weight", self.low),
            ("medium weight", self.medium),
            ("high weight", self.high),
            ("penalty scale", self.penalty_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert_eq!(ExposureWeights::default().validate(), Ok(()));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    #[case(f64::INFINITY)]
    fn rejects_bad_radius(#[case] radius_m: f64) {
        let weights = ExposureWeights {
            radius_m,
            ..ExposureWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::InvalidRadius { .. })
        ));
    }

    #[rstest]
    fn rejects_negative_weight() {
        let weights = ExposureWeights {
            medium: -1.0,
            ..ExposureWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::InvalidWeight {
                name: "medium weight",
                ..
            })
        ));
    }

    #[rstest]
    fn tier_weights_rise_with_risk() {
        let weights = ExposureWeights::default();
        assert!(weights.tier_weight(RiskLevel::Low) < weights.tier_weight(RiskLevel::Medium));
        assert!(weights.tier_weight(RiskLevel::Medium) < weights.tier_weight(RiskLevel::High));
    }
}
