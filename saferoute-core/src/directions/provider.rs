//! Directions provider trait and route types.

use std::time::Duration;

use async_trait::async_trait;
use geo::LineString;

use crate::RoutePoint;

use super::error::DirectionsError;

/// Mode of travel requested from the directions service.
///
/// Only driving is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    /// Road travel by car.
    #[default]
    Driving,
}

/// Input for a single directions call.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    /// Route start.
    pub origin: RoutePoint,
    /// Route end.
    pub destination: RoutePoint,
    /// Intermediate stops, in caller order.
    pub waypoints: Vec<RoutePoint>,
    /// Requested travel mode.
    pub mode: TravelMode,
    /// Allow the service to permute waypoints to shorten the route.
    pub optimize_waypoints: bool,
}

impl DirectionsRequest {
    /// Driving request with waypoint optimisation enabled.
    #[must_use]
    pub fn driving(
        origin: RoutePoint,
        destination: RoutePoint,
        waypoints: Vec<RoutePoint>,
    ) -> Self {
        Self {
            origin,
            destination,
            waypoints,
            mode: TravelMode::Driving,
            optimize_waypoints: true,
        }
    }

    /// All stops in caller order: origin, waypoints, destination.
    pub fn stops(&self) -> impl Iterator<Item = &RoutePoint> {
        std::iter::once(&self.origin)
            .chain(self.waypoints.iter())
            .chain(std::iter::once(&self.destination))
    }
}

/// A route returned by a [`DirectionsProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    /// Route geometry with `x = longitude`, `y = latitude`.
    pub path: LineString<f64>,
    /// Total length in metres.
    pub distance_m: f64,
    /// Total driving time.
    pub duration: Duration,
    /// Indices into [`DirectionsRequest::waypoints`] in visiting order.
    pub stop_order: Vec<usize>,
    /// Number of alternative routes the service offered.
    pub alternatives: u32,
}

impl PlannedRoute {
    /// Construct a route that visits waypoints in their original order.
    #[must_use]
    pub fn new(
        path: LineString<f64>,
        distance_m: f64,
        duration: Duration,
        waypoint_count: usize,
    ) -> Self {
        Self {
            path,
            distance_m,
            duration,
            stop_order: (0..waypoint_count).collect(),
            alternatives: 0,
        }
    }

    /// Override the waypoint visiting order.
    #[must_use]
    pub fn with_stop_order(mut self, stop_order: Vec<usize>) -> Self {
        self.stop_order = stop_order;
        self
    }

    /// Set the number of alternatives offered.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: u32) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Waypoints of `request` rearranged into visiting order.
    ///
    /// Indices that fall outside the request's waypoint list are skipped.
    #[must_use]
    pub fn ordered_waypoints<'a>(&self, request: &'a DirectionsRequest) -> Vec<&'a RoutePoint> {
        self.stop_order
            .iter()
            .filter_map(|&index| request.waypoints.get(index))
            .collect()
    }
}

/// Plan a route through a sequence of stops.
///
/// Implementations issue a single service call and do not retry.
#[async_trait(?Send)]
pub trait DirectionsProvider {
    /// Compute a route for `request`.
    async fn route(&self, request: &DirectionsRequest) -> Result<PlannedRoute, DirectionsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> DirectionsRequest {
        DirectionsRequest::driving(
            RoutePoint::new(28.63, 77.21, "A"),
            RoutePoint::new(28.56, 77.24, "D"),
            vec![
                RoutePoint::new(28.60, 77.22, "B"),
                RoutePoint::new(28.58, 77.23, "C"),
            ],
        )
    }

    #[rstest]
    fn driving_requests_optimise_waypoints(request: DirectionsRequest) {
        assert_eq!(request.mode, TravelMode::Driving);
        assert!(request.optimize_waypoints);
        let names: Vec<_> = request.stops().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[rstest]
    fn ordered_waypoints_follow_stop_order(request: DirectionsRequest) {
        let route = PlannedRoute::new(
            line_string![(x: 77.21, y: 28.63), (x: 77.24, y: 28.56)],
            9_000.0,
            Duration::from_secs(900),
            2,
        )
        .with_stop_order(vec![1, 0, 7]);
        let names: Vec<_> = route
            .ordered_waypoints(&request)
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["C", "B"]);
    }
}
