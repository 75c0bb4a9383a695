//! Renderer-facing session state.

use saferoute_core::{
    DisplaySizeClass, PlannedRoute, RouteInfo, RoutePoint, SafetyBadge, SafetyZone,
};

use crate::error::{ProviderInitError, RouteComputationError};
use crate::view::{Camera, MapMarker, MapViewState, ZoneOverlay};

/// Where the request flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted.
    #[default]
    Idle,
    /// Addresses are being geocoded.
    Resolving,
    /// Both endpoints are known.
    Ready,
    /// The last submission failed; see [`SessionState::error_message`].
    Error,
}

/// Everything a renderer needs to draw the session.
///
/// Only [`crate::RequestCoordinator`] mutates this value. `Default` is the
/// initial state, and `clear()` restores exactly that apart from
/// [`SessionState::provider_failure`], which is terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    /// Raw "from" text of the last submission.
    pub origin_text: String,
    /// Raw "to" text of the last submission.
    pub destination_text: String,
    /// Resolved route start.
    pub origin_point: Option<RoutePoint>,
    /// Resolved route end.
    pub destination_point: Option<RoutePoint>,
    /// Intermediate stops supplied as direct input.
    pub waypoints: Vec<RoutePoint>,
    /// Whether the route should be shown; implies both points are set.
    pub show_directions: bool,
    /// The planned route geometry.
    pub route: Option<PlannedRoute>,
    /// Summary of the planned route.
    pub route_info: Option<RouteInfo>,
    /// Last route planning failure.
    pub route_error: Option<RouteComputationError>,
    /// A route is waiting for the map provider to become ready.
    pub route_pending: bool,
    /// A route request is in flight.
    pub planning: bool,
    /// Request flow phase.
    pub phase: Phase,
    /// User-visible error text while in [`Phase::Error`].
    pub error_message: Option<String>,
    /// Camera and zone selection.
    pub view: MapViewState,
    /// Layout hint from the host.
    pub display_size_class: DisplaySizeClass,
    /// The map provider failed to initialise. When set, the renderer shows
    /// a full-screen error in place of the map.
    pub provider_failure: Option<ProviderInitError>,
}

impl SessionState {
    /// Whether a spinner should be shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Resolving || self.planning
    }

    /// Badge for the current route, if one has been scored.
    #[must_use]
    pub fn badge(&self) -> Option<SafetyBadge> {
        self.route_info.as_ref().map(RouteInfo::badge)
    }

    /// Camera for the current view.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.view.camera()
    }

    /// Overlay for the selected zone.
    #[must_use]
    pub fn overlay(&self) -> Option<ZoneOverlay> {
        self.view.overlay()
    }

    /// Markers for the current view over `zones`.
    #[must_use]
    pub fn markers(&self, zones: &[SafetyZone]) -> Vec<MapMarker> {
        self.view.markers(
            zones,
            self.origin_point.as_ref(),
            self.destination_point.as_ref(),
        )
    }

    /// Forget the previous request's outcome, keeping view and layout.
    pub(crate) fn reset_request(&mut self) {
        self.origin_point = None;
        self.destination_point = None;
        self.waypoints.clear();
        self.show_directions = false;
        self.route = None;
        self.route_info = None;
        self.route_error = None;
        self.route_pending = false;
        self.planning = false;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use saferoute_core::{BadgeTier, SampleRouteScorer};

    #[rstest]
    fn initial_state_is_idle_and_empty() {
        let state = SessionState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.show_directions);
        assert!(!state.is_loading());
        assert_eq!(state.badge(), None);
        assert_eq!(state.display_size_class, DisplaySizeClass::default());
    }

    #[rstest]
    fn badge_follows_route_info() {
        let state = SessionState {
            route_info: Some(SampleRouteScorer::sample()),
            ..SessionState::default()
        };
        assert_eq!(state.badge().map(|b| b.tier), Some(BadgeTier::Safe));
    }

    #[rstest]
    fn planning_counts_as_loading() {
        let state = SessionState {
            phase: Phase::Ready,
            planning: true,
            ..SessionState::default()
        };
        assert!(state.is_loading());
    }

    #[rstest]
    fn reset_request_keeps_view() {
        let mut state = SessionState {
            origin_point: Some(RoutePoint::new(1.0, 2.0, "A")),
            show_directions: true,
            route_pending: true,
            error_message: Some("boom".to_owned()),
            ..SessionState::default()
        };
        state.view.set_user_location(saferoute_core::LatLng::new(12.9, 77.6));
        state.reset_request();
        assert_eq!(state.origin_point, None);
        assert!(!state.show_directions);
        assert!(!state.route_pending);
        assert_eq!(state.error_message, None);
        assert!(state.view.user_location().is_some());
    }
}
