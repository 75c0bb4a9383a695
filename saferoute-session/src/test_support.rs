//! Runtime helpers and provider doubles for session tests.

use std::cell::Cell;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use saferoute_core::{
    DirectionsError, DirectionsProvider, DirectionsRequest, GeolocationError,
    GeolocationProvider, LatLng, PlannedRoute, Position, PositionOptions,
};

/// Drive `future` to completion on a fresh current-thread runtime.
///
/// # Panics
///
/// Panics if the runtime cannot be built.
#[expect(clippy::expect_used, reason = "test helper should fail fast")]
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime should build")
        .block_on(future)
}

/// Like [`block_on`], inside a [`tokio::task::LocalSet`] so that
/// `spawn_local` is available.
///
/// # Panics
///
/// Panics if the runtime cannot be built.
#[expect(clippy::expect_used, reason = "test helper should fail fast")]
pub fn run_local<F: Future>(future: F) -> F::Output {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime should build");
    tokio::task::LocalSet::new().block_on(&runtime, future)
}

/// Directions double that yields to the scheduler once before answering,
/// so concurrent plans genuinely overlap.
#[derive(Debug)]
pub struct YieldingDirections {
    route: PlannedRoute,
    calls: Cell<usize>,
}

impl YieldingDirections {
    /// Answer every request with `route`.
    #[must_use]
    pub const fn new(route: PlannedRoute) -> Self {
        Self {
            route,
            calls: Cell::new(0),
        }
    }

    /// Number of `route` calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl DirectionsProvider for YieldingDirections {
    async fn route(&self, _request: &DirectionsRequest) -> Result<PlannedRoute, DirectionsError> {
        self.calls.set(self.calls.get() + 1);
        tokio::task::yield_now().await;
        Ok(self.route.clone())
    }
}

/// Geolocation double that answers with a fresh fix after `delay`.
///
/// Records whether an answer was ever produced, so tests can tell a
/// cancelled lookup from one whose result was merely ignored.
#[derive(Debug)]
pub struct DelayedGeolocation {
    coordinate: LatLng,
    delay: Duration,
    answered: Cell<bool>,
}

impl DelayedGeolocation {
    /// Answer with `lat`, `lng` after `delay`.
    #[must_use]
    pub const fn new(lat: f64, lng: f64, delay: Duration) -> Self {
        Self {
            coordinate: LatLng::new(lat, lng),
            delay,
            answered: Cell::new(false),
        }
    }

    /// Whether a fix was produced.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered.get()
    }
}

#[async_trait(?Send)]
impl GeolocationProvider for DelayedGeolocation {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, GeolocationError> {
        tokio::time::sleep(self.delay).await;
        self.answered.set(true);
        Ok(Position::now(self.coordinate))
    }
}
