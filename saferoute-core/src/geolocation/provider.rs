//! Geolocation provider trait and position types.

use std::time::{Duration, SystemTime};

use async_trait::async_trait;

use crate::LatLng;

use super::error::GeolocationError;

/// Default time allowed for a position fix.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Default maximum age of a cached position that is still accepted.
pub const DEFAULT_LOCATION_MAX_AGE: Duration = Duration::from_secs(60);

/// Options passed with every position query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Ask the platform for its most accurate fix.
    pub enable_high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// Accept cached positions younger than this.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: DEFAULT_LOCATION_TIMEOUT,
            maximum_age: DEFAULT_LOCATION_MAX_AGE,
        }
    }
}

impl PositionOptions {
    /// Override the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the maximum accepted age.
    #[must_use]
    pub const fn with_maximum_age(mut self, maximum_age: Duration) -> Self {
        self.maximum_age = maximum_age;
        self
    }
}

/// A device position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Reported coordinate.
    pub coordinate: LatLng,
    /// When the fix was taken.
    pub timestamp: SystemTime,
}

impl Position {
    /// A fix taken now.
    #[must_use]
    pub fn now(coordinate: LatLng) -> Self {
        Self {
            coordinate,
            timestamp: SystemTime::now(),
        }
    }

    /// Age of the fix relative to `now`; clock skew counts as zero.
    #[must_use]
    pub fn age_at(&self, now: SystemTime) -> Duration {
        now.duration_since(self.timestamp).unwrap_or_default()
    }

    /// Check the fix against `options.maximum_age`.
    ///
    /// # Errors
    ///
    /// Returns [`GeolocationError::Stale`] when the fix is too old.
    pub fn ensure_fresh(
        &self,
        options: &PositionOptions,
        now: SystemTime,
    ) -> Result<(), GeolocationError> {
        let age = self.age_at(now);
        if age > options.maximum_age {
            return Err(GeolocationError::Stale {
                age,
                max_age: options.maximum_age,
            });
        }
        Ok(())
    }
}

/// Query the device's current position.
///
/// Implementations should honour `options` where the platform allows it;
/// callers enforce the timeout and staleness window independently.
#[async_trait(?Send)]
pub trait GeolocationProvider {
    /// Return the current position or an error.
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Position, GeolocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_browser_options() {
        let options = PositionOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.maximum_age, Duration::from_secs(60));
    }

    #[rstest]
    #[case(Duration::from_secs(59), true)]
    #[case(Duration::from_secs(60), true)]
    #[case(Duration::from_secs(61), false)]
    fn staleness_window(#[case] age: Duration, #[case] fresh: bool) {
        let now = SystemTime::now();
        let position = Position {
            coordinate: LatLng::new(12.9, 77.6),
            timestamp: now - age,
        };
        let result = position.ensure_fresh(&PositionOptions::default(), now);
        assert_eq!(result.is_ok(), fresh);
    }

    #[rstest]
    fn future_timestamps_count_as_fresh() {
        let now = SystemTime::now();
        let position = Position {
            coordinate: LatLng::new(12.9, 77.6),
            timestamp: now + Duration::from_secs(5),
        };
        assert_eq!(position.age_at(now), Duration::ZERO);
    }
}
