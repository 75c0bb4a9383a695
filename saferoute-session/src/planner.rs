//! Readiness-gated, latest-wins route planning.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use saferoute_core::{DirectionsProvider, DirectionsRequest, PlannedRoute, RoutePoint};

use crate::error::RouteComputationError;
use crate::gate::ReadinessGate;

/// Result of a [`RoutePlanner::plan`] call that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The readiness gate was closed; no request was sent.
    NotReady,
    /// A newer plan started while this one was in flight; its result was
    /// discarded.
    Superseded,
    /// The route to apply.
    Planned(PlannedRoute),
}

/// Plan driving routes through a [`DirectionsProvider`].
///
/// Every call checks the [`ReadinessGate`] first and is a no-op while the
/// gate is closed. Calls are ticketed: when a newer call starts before an
/// older one resolves, the older result is reported as
/// [`PlanOutcome::Superseded`] whether it succeeded or failed.
pub struct RoutePlanner {
    directions: Rc<dyn DirectionsProvider>,
    gate: ReadinessGate,
    latest: Cell<u64>,
}

impl std::fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutePlanner")
            .field("directions", &"<dyn DirectionsProvider>")
            .field("gate", &self.gate)
            .field("latest", &self.latest.get())
            .finish()
    }
}

impl RoutePlanner {
    /// Build a planner guarded by `gate`.
    #[must_use]
    pub fn new(directions: Rc<dyn DirectionsProvider>, gate: ReadinessGate) -> Self {
        Self {
            directions,
            gate,
            latest: Cell::new(0),
        }
    }

    /// The gate this planner checks.
    #[must_use]
    pub const fn gate(&self) -> &ReadinessGate {
        &self.gate
    }

    /// Request a driving route with waypoint optimisation.
    ///
    /// # Errors
    ///
    /// Returns [`RouteComputationError`] when the provider fails and no newer
    /// plan has started since.
    pub async fn plan(
        &self,
        origin: &RoutePoint,
        destination: &RoutePoint,
        waypoints: &[RoutePoint],
    ) -> Result<PlanOutcome, RouteComputationError> {
        if !self.gate.is_ready() {
            debug!("map provider not ready; skipping route plan");
            return Ok(PlanOutcome::NotReady);
        }

        let ticket = self.next_ticket();
        let request =
            DirectionsRequest::driving(origin.clone(), destination.clone(), waypoints.to_vec());
        let result = self.directions.route(&request).await;

        if self.latest.get() != ticket {
            debug!("discarding route plan {ticket}; superseded by {}", self.latest.get());
            return Ok(PlanOutcome::Superseded);
        }

        match result {
            Ok(route) => Ok(PlanOutcome::Planned(route)),
            Err(source) => {
                warn!(
                    "route from {:?} to {:?} failed: {source}",
                    origin.name, destination.name
                );
                Err(RouteComputationError { source })
            }
        }
    }

    /// Mark every in-flight plan as superseded.
    pub fn invalidate(&self) {
        self.next_ticket();
    }

    fn next_ticket(&self) -> u64 {
        let ticket = self.latest.get().wrapping_add(1);
        self.latest.set(ticket);
        ticket
    }
}
