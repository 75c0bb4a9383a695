//! The request state machine that owns [`SessionState`].
//!
//! A submission moves the session `Idle → Resolving → Ready`; any failure to
//! resolve moves it to `Error`. Submissions are split into three phases so
//! callers can overlap them:
//!
//! 1. [`RequestCoordinator::begin_submit`] validates input and stamps a
//!    generation number.
//! 2. [`RequestCoordinator::resolve_submission`] geocodes both addresses
//!    concurrently and only borrows the coordinator shared.
//! 3. [`RequestCoordinator::apply_resolution`] discards results whose
//!    generation is no longer current, then plans and scores the route.
//!
//! [`RequestCoordinator::submit`] chains all three.

use std::rc::Rc;

use log::{debug, info, warn};
use saferoute_core::{
    DirectionsProvider, GeocodingProvider, GeolocationProvider, LatLng, PositionOptions,
    RouteInfo, RoutePoint, RouteScorer, RouteWidgetOptions, SafetyZoneRegistry,
    SampleRouteScorer,
};

use crate::error::{
    InputField, ProviderInitError, ResolutionError, RouteComputationError, SubmitError,
};
use crate::gate::ReadinessGate;
use crate::location::{LocationLookup, LookupStatus};
use crate::planner::{PlanOutcome, RoutePlanner};
use crate::resolver::AddressResolver;
use crate::state::{Phase, SessionState};

/// A validated submission waiting to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    origin_text: String,
    destination_text: String,
}

impl Submission {
    /// Generation stamped by [`RequestCoordinator::begin_submit`].
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Origin address as submitted.
    #[must_use]
    pub fn origin_text(&self) -> &str {
        &self.origin_text
    }

    /// Destination address as submitted.
    #[must_use]
    pub fn destination_text(&self) -> &str {
        &self.destination_text
    }
}

/// Outcome of resolving both addresses of a [`Submission`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPair {
    generation: u64,
    /// Resolved origin, if found.
    pub origin: Option<RoutePoint>,
    /// Resolved destination, if found.
    pub destination: Option<RoutePoint>,
}

impl ResolvedPair {
    /// Generation of the submission this pair belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a submission or route refresh ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A route was planned and scored.
    Routed(RouteInfo),
    /// The map provider is not ready; the route will be planned by
    /// [`RequestCoordinator::on_map_ready`].
    AwaitingMap,
    /// The endpoints resolved but the directions service failed.
    RouteFailed(RouteComputationError),
    /// One or both addresses did not resolve.
    Unresolved(ResolutionError),
    /// The map provider failed to initialise; no route will be planned.
    ProviderUnavailable(ProviderInitError),
    /// A newer submission or a reset happened first; nothing was applied.
    Superseded,
}

/// Single owner of the session state.
///
/// All mutation goes through `&mut self`. Providers are shared through `Rc`
/// and run on the caller's single-threaded scheduler.
pub struct RequestCoordinator {
    resolver: AddressResolver,
    planner: RoutePlanner,
    scorer: Box<dyn RouteScorer>,
    registry: SafetyZoneRegistry,
    state: SessionState,
    generation: u64,
    location: Option<LocationLookup>,
}

impl std::fmt::Debug for RequestCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestCoordinator")
            .field("resolver", &self.resolver)
            .field("planner", &self.planner)
            .field("registry", &self.registry)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl RequestCoordinator {
    /// Build a coordinator with a pending readiness gate and the sample
    /// scorer.
    #[must_use]
    pub fn new(
        geocoder: Rc<dyn GeocodingProvider>,
        directions: Rc<dyn DirectionsProvider>,
        registry: SafetyZoneRegistry,
    ) -> Self {
        Self {
            resolver: AddressResolver::new(geocoder),
            planner: RoutePlanner::new(directions, ReadinessGate::new()),
            scorer: Box::new(SampleRouteScorer),
            registry,
            state: SessionState::default(),
            generation: 0,
            location: None,
        }
    }

    /// Replace the route scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl RouteScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Zones shown on the map.
    #[must_use]
    pub const fn registry(&self) -> &SafetyZoneRegistry {
        &self.registry
    }

    /// The address resolver.
    #[must_use]
    pub const fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    /// The provider readiness gate.
    #[must_use]
    pub const fn gate(&self) -> &ReadinessGate {
        self.planner.gate()
    }

    /// The map provider's initialisation failure, if it failed.
    #[must_use]
    pub fn provider_failure(&self) -> Option<ProviderInitError> {
        self.gate().failure()
    }

    /// Validate a submission and enter [`Phase::Resolving`].
    ///
    /// Any earlier in-flight submission is superseded.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] when either text is blank. The
    /// state is left untouched.
    pub fn begin_submit(
        &mut self,
        origin_text: &str,
        destination_text: &str,
    ) -> Result<Submission, SubmitError> {
        if origin_text.trim().is_empty() {
            return Err(SubmitError::Validation {
                field: InputField::Origin,
            });
        }
        if destination_text.trim().is_empty() {
            return Err(SubmitError::Validation {
                field: InputField::Destination,
            });
        }

        self.supersede();
        self.state.reset_request();
        origin_text.clone_into(&mut self.state.origin_text);
        destination_text.clone_into(&mut self.state.destination_text);
        self.transition(Phase::Resolving);

        Ok(Submission {
            generation: self.generation,
            origin_text: origin_text.to_owned(),
            destination_text: destination_text.to_owned(),
        })
    }

    /// Geocode both addresses of `submission` concurrently.
    pub async fn resolve_submission(&self, submission: &Submission) -> ResolvedPair {
        let (origin, destination) = tokio::join!(
            self.resolver.resolve(&submission.origin_text),
            self.resolver.resolve(&submission.destination_text),
        );
        ResolvedPair {
            generation: submission.generation,
            origin,
            destination,
        }
    }

    /// Apply resolved endpoints and, when both resolved, plan the route.
    pub async fn apply_resolution(&mut self, resolved: ResolvedPair) -> SubmitOutcome {
        if resolved.generation != self.generation {
            debug!(
                "discarding resolution for submission {}; current is {}",
                resolved.generation, self.generation
            );
            return SubmitOutcome::Superseded;
        }

        let err = ResolutionError {
            origin_found: resolved.origin.is_some(),
            destination_found: resolved.destination.is_some(),
        };
        let (Some(origin), Some(destination)) = (resolved.origin, resolved.destination) else {
            warn!("{err}");
            self.state.error_message = Some(err.user_message().to_owned());
            self.transition(Phase::Error);
            return SubmitOutcome::Unresolved(err);
        };

        self.transition(Phase::Ready);
        self.state.origin_point = Some(origin);
        self.state.destination_point = Some(destination);
        self.state.show_directions = true;
        self.plan_current().await
    }

    /// Validate, resolve and apply a submission in one go.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] when either text is blank; no
    /// provider is called in that case.
    pub async fn submit(
        &mut self,
        origin_text: &str,
        destination_text: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        let submission = self.begin_submit(origin_text, destination_text)?;
        let resolved = self.resolve_submission(&submission).await;
        Ok(self.apply_resolution(resolved).await)
    }

    /// Show a route between directly supplied coordinates.
    ///
    /// Returns `None` when `options` does not ask for directions; the
    /// endpoints are still stored so they can be drawn as markers.
    pub async fn show_route(&mut self, options: RouteWidgetOptions) -> Option<SubmitOutcome> {
        self.supersede();
        self.state.reset_request();
        let wants_directions = options.wants_directions();
        self.state.origin_point = options.origin;
        self.state.destination_point = options.destination;
        self.state.waypoints = options.waypoints;
        self.state.display_size_class = options.display_size_class;

        if !wants_directions {
            self.transition(Phase::Idle);
            return None;
        }
        self.transition(Phase::Ready);
        self.state.show_directions = true;
        Some(self.plan_current().await)
    }

    /// Re-plan the route between the current endpoints.
    ///
    /// Returns `None` when no route is being shown.
    pub async fn refresh_route(&mut self) -> Option<SubmitOutcome> {
        if !self.state.show_directions {
            return None;
        }
        Some(self.plan_current().await)
    }

    /// The map provider finished initialising.
    ///
    /// Opens the readiness gate and plans any route that was waiting on it.
    pub async fn on_map_ready(&mut self) -> Option<SubmitOutcome> {
        self.gate().open();
        if !self.state.route_pending || !self.gate().is_ready() {
            return None;
        }
        self.refresh_route().await
    }

    /// The map provider failed to initialise. Terminal for this coordinator.
    pub fn on_map_load_failed(&mut self, reason: &str) {
        if self.gate().fail(reason) {
            self.planner.invalidate();
            self.state.planning = false;
            self.state.route_pending = false;
            self.state.show_directions = false;
            self.state.provider_failure = self.gate().failure();
        }
    }

    /// Reset the session to its initial state.
    ///
    /// In-flight resolutions, routes and location lookups are discarded.
    /// The readiness gate is unaffected, so a provider failure survives.
    pub fn clear(&mut self) {
        self.supersede();
        self.location = None;
        self.state = SessionState {
            provider_failure: self.gate().failure(),
            ..SessionState::default()
        };
        info!("session cleared");
    }

    /// Leave [`Phase::Error`]. Returns whether there was an error to dismiss.
    pub fn dismiss_error(&mut self) -> bool {
        if self.state.phase != Phase::Error {
            return false;
        }
        self.state.error_message = None;
        self.transition(Phase::Idle);
        true
    }

    /// Select the zone with `id`, replacing any previous selection.
    ///
    /// Unknown ids leave the selection unchanged and return `false`.
    pub fn select_zone(&mut self, id: &str) -> bool {
        let Some(zone) = self.registry.get(id) else {
            debug!("ignoring selection of unknown zone {id:?}");
            return false;
        };
        self.state.view.select_zone(zone.clone());
        true
    }

    /// Close the zone overlay.
    pub fn clear_selection(&mut self) {
        self.state.view.clear_selection();
    }

    /// Centre the map on `location`. Returns whether it was accepted.
    pub fn set_user_location(&mut self, location: LatLng) -> bool {
        self.state.view.set_user_location(location)
    }

    /// Start a background location lookup on the current `LocalSet`.
    ///
    /// Replaces (and cancels) any lookup already running.
    ///
    /// # Panics
    ///
    /// Panics when called outside a [`tokio::task::LocalSet`] context.
    pub fn start_location_lookup(
        &mut self,
        provider: Rc<dyn GeolocationProvider>,
        options: PositionOptions,
    ) {
        self.location = Some(LocationLookup::spawn(provider, options));
    }

    /// Apply the location lookup result if it has arrived.
    ///
    /// Returns whether the camera moved.
    pub fn poll_location(&mut self) -> bool {
        let Some(lookup) = self.location.as_mut() else {
            return false;
        };
        match lookup.try_take() {
            LookupStatus::Pending => false,
            LookupStatus::Ready(position) => {
                self.location = None;
                self.set_user_location(position.coordinate)
            }
            LookupStatus::Finished => {
                self.location = None;
                false
            }
        }
    }

    /// Wait for the location lookup to end and apply its result.
    ///
    /// Returns whether the camera moved.
    pub async fn await_location(&mut self) -> bool {
        let Some(mut lookup) = self.location.take() else {
            return false;
        };
        match lookup.finished().await {
            Some(position) => self.set_user_location(position.coordinate),
            None => false,
        }
    }

    /// Whether a location lookup is outstanding.
    #[must_use]
    pub const fn is_locating(&self) -> bool {
        self.location.is_some()
    }

    async fn plan_current(&mut self) -> SubmitOutcome {
        let (Some(origin), Some(destination)) = (
            self.state.origin_point.clone(),
            self.state.destination_point.clone(),
        ) else {
            return SubmitOutcome::Superseded;
        };
        let waypoints = self.state.waypoints.clone();

        self.state.planning = true;
        self.state.route_pending = false;
        let result = self.planner.plan(&origin, &destination, &waypoints).await;
        self.state.planning = false;

        match result {
            Ok(PlanOutcome::NotReady) => {
                if let Some(err) = self.gate().failure() {
                    debug!("route dropped: {err}");
                    self.state.show_directions = false;
                    self.state.provider_failure = Some(err.clone());
                    return SubmitOutcome::ProviderUnavailable(err);
                }
                debug!("route deferred until the map provider is ready");
                self.state.route_pending = true;
                SubmitOutcome::AwaitingMap
            }
            Ok(PlanOutcome::Superseded) => SubmitOutcome::Superseded,
            Ok(PlanOutcome::Planned(route)) => {
                let info = self.scorer.score(&route, self.registry.zones());
                info!(
                    "route planned: {}, {}, score {}",
                    info.distance, info.duration, info.safety_score
                );
                self.state.route = Some(route);
                self.state.route_info = Some(info.clone());
                self.state.route_error = None;
                SubmitOutcome::Routed(info)
            }
            Err(err) => {
                self.state.route = None;
                self.state.route_info = None;
                self.state.route_error = Some(err.clone());
                SubmitOutcome::RouteFailed(err)
            }
        }
    }

    fn supersede(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.planner.invalidate();
    }

    fn transition(&mut self, phase: Phase) {
        if self.state.phase != phase {
            info!("session {:?} -> {phase:?}", self.state.phase);
            self.state.phase = phase;
        }
    }
}
