//! [`DirectionsProvider`] backed by OSRM's Route and Trip services.

use std::time::Duration;

use async_trait::async_trait;
use geo::LineString;
use log::debug;
use reqwest::Client;
use saferoute_core::{
    DirectionsError, DirectionsProvider, DirectionsRequest, PlannedRoute, TravelMode,
};
use serde::de::DeserializeOwned;
use url::Url;

use super::osrm::{OsrmRoute, RouteResponse, TripResponse};
use crate::error::{ProviderBuildError, convert_reqwest_error, parse_base_url};
use crate::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Local OSRM instance, as started by `osrm-routed`.
pub const DEFAULT_OSRM_URL: &str = "http://localhost:5000";

/// Configuration for [`OsrmDirectionsProvider`].
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OsrmConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Directions over HTTP from an OSRM server.
///
/// Requests without intermediate stops use the Route service and report how
/// many alternatives OSRM found. When stops are present and the request asks
/// for optimisation, the Trip service picks their visiting order while
/// keeping the origin first and the destination last.
#[derive(Debug, Clone)]
pub struct OsrmDirectionsProvider {
    client: Client,
    config: OsrmConfig,
    base: Url,
}

impl OsrmDirectionsProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn with_config(config: OsrmConfig) -> Result<Self, ProviderBuildError> {
        let base = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self {
            client,
            config,
            base,
        })
    }

    /// Build the service URL for `request`.
    ///
    /// Coordinates are semicolon-separated `lon,lat` pairs in stop order.
    fn build_url(&self, request: &DirectionsRequest) -> Result<Url, DirectionsError> {
        let coords = request
            .stops()
            .map(|stop| format!("{},{}", stop.lng, stop.lat))
            .collect::<Vec<_>>()
            .join(";");
        let service = if uses_trip_service(request) {
            "trip"
        } else {
            "route"
        };
        let path = format!("{service}/v1/{}/{coords}", profile(request.mode));
        let mut url = self
            .base
            .join(&path)
            .map_err(|err| DirectionsError::ParseError {
                message: format!("cannot build directions URL: {err}"),
            })?;
        {
            let mut query = url.query_pairs_mut();
            if uses_trip_service(request) {
                query
                    .append_pair("source", "first")
                    .append_pair("destination", "last")
                    .append_pair("roundtrip", "false");
            } else {
                let alternatives = request.waypoints.is_empty();
                query.append_pair("alternatives", if alternatives { "true" } else { "false" });
            }
            query
                .append_pair("overview", "full")
                .append_pair("geometries", "geojson");
        }
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, DirectionsError> {
        let url_text = url.to_string();
        debug!("requesting directions from {url_text}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, &url_text, self.config.timeout))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, &url_text, self.config.timeout))?;

        response
            .json()
            .await
            .map_err(|err| DirectionsError::ParseError {
                message: err.to_string(),
            })
    }
}

const fn profile(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "driving",
    }
}

fn uses_trip_service(request: &DirectionsRequest) -> bool {
    request.optimize_waypoints && !request.waypoints.is_empty()
}

/// Convert a Route service response.
///
/// The first route is the answer; any further routes count as alternatives.
/// Stops keep their input order.
///
/// # Errors
///
/// Returns [`DirectionsError::ServiceError`] for a non-`Ok` code and
/// [`DirectionsError::ParseError`] when no usable route is present.
pub fn route_from_response(
    response: RouteResponse,
    waypoint_count: usize,
) -> Result<PlannedRoute, DirectionsError> {
    if !response.is_ok() {
        return Err(DirectionsError::ServiceError {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let mut routes = response.routes.unwrap_or_default().into_iter();
    let best = routes.next().ok_or_else(|| DirectionsError::ParseError {
        message: "OSRM response contains no routes".to_owned(),
    })?;
    let alternatives = u32::try_from(routes.len()).unwrap_or(u32::MAX);

    Ok(planned_route(best, waypoint_count)?.with_alternatives(alternatives))
}

/// Convert a Trip service response for a request with `waypoint_count`
/// intermediate stops.
///
/// OSRM lists waypoints in input order, each tagged with its position in
/// the trip. Sorting the intermediate ones by that position yields the
/// optimised visiting order as indices into the request's waypoints.
///
/// # Errors
///
/// Returns [`DirectionsError::ServiceError`] for a non-`Ok` code and
/// [`DirectionsError::ParseError`] when the trip or its waypoints are
/// missing or inconsistent.
pub fn trip_from_response(
    response: TripResponse,
    waypoint_count: usize,
) -> Result<PlannedRoute, DirectionsError> {
    if !response.is_ok() {
        return Err(DirectionsError::ServiceError {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let trip = response
        .trips
        .and_then(|trips| trips.into_iter().next())
        .ok_or_else(|| DirectionsError::ParseError {
            message: "OSRM response contains no trips".to_owned(),
        })?;
    let waypoints = response.waypoints.unwrap_or_default();
    if waypoints.len() != waypoint_count + 2 {
        return Err(DirectionsError::ParseError {
            message: format!(
                "OSRM trip lists {} waypoints, expected {}",
                waypoints.len(),
                waypoint_count + 2
            ),
        });
    }

    let mut intermediate: Vec<(usize, usize)> = waypoints
        .iter()
        .enumerate()
        .skip(1)
        .take(waypoint_count)
        .map(|(input, placed)| (placed.waypoint_index, input - 1))
        .collect();
    intermediate.sort_unstable();
    let stop_order = intermediate.into_iter().map(|(_, input)| input).collect();

    Ok(planned_route(trip, waypoint_count)?.with_stop_order(stop_order))
}

fn planned_route(route: OsrmRoute, waypoint_count: usize) -> Result<PlannedRoute, DirectionsError> {
    if !route.distance.is_finite() || route.distance < 0.0 {
        return Err(DirectionsError::ParseError {
            message: format!("invalid route distance {}", route.distance),
        });
    }
    if !route.duration.is_finite() || route.duration < 0.0 {
        return Err(DirectionsError::ParseError {
            message: format!("invalid route duration {}", route.duration),
        });
    }
    let path: LineString<f64> = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| (lng, lat))
        .collect::<Vec<_>>()
        .into();
    Ok(PlannedRoute::new(
        path,
        route.distance,
        Duration::from_secs_f64(route.duration),
        waypoint_count,
    ))
}

#[async_trait(?Send)]
impl DirectionsProvider for OsrmDirectionsProvider {
    async fn route(&self, request: &DirectionsRequest) -> Result<PlannedRoute, DirectionsError> {
        debug!("routing {}", describe_stops(request));
        let url = self.build_url(request)?;
        let waypoint_count = request.waypoints.len();
        if uses_trip_service(request) {
            trip_from_response(self.fetch(url).await?, waypoint_count)
        } else {
            route_from_response(self.fetch(url).await?, waypoint_count)
        }
    }
}

/// Label used for the route's stops in log output.
#[must_use]
pub fn describe_stops(request: &DirectionsRequest) -> String {
    request
        .stops()
        .map(|stop| stop.name.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
