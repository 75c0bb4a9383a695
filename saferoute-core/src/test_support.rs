//! Deterministic provider doubles used by unit and behaviour tests.
//!
//! Every stub counts its calls so tests can assert how many provider round
//! trips an operation made.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use geo::LineString;

use crate::{
    DirectionsError, DirectionsProvider, DirectionsRequest, GeocodeCandidate, GeocodingError,
    GeocodingProvider, GeolocationError, GeolocationProvider, LatLng, PlannedRoute, Position,
    PositionOptions,
};

/// Stub geocoder answering from an in-memory address book.
///
/// Unknown addresses resolve to an empty candidate list.
#[derive(Debug, Default)]
pub struct StubGeocoder {
    entries: HashMap<String, Result<Vec<GeocodeCandidate>, GeocodingError>>,
    calls: Cell<usize>,
    queries: RefCell<Vec<String>>,
}

impl StubGeocoder {
    /// Empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `address` to a single candidate.
    #[must_use]
    pub fn with_match(mut self, address: &str, lat: f64, lng: f64, label: &str) -> Self {
        self.entries.insert(
            address.to_owned(),
            Ok(vec![GeocodeCandidate::new(LatLng::new(lat, lng), label)]),
        );
        self
    }

    /// Resolve `address` to several candidates, best first.
    #[must_use]
    pub fn with_candidates(mut self, address: &str, candidates: Vec<GeocodeCandidate>) -> Self {
        self.entries.insert(address.to_owned(), Ok(candidates));
        self
    }

    /// Fail lookups of `address` with `error`.
    #[must_use]
    pub fn with_error(mut self, address: &str, error: GeocodingError) -> Self {
        self.entries.insert(address.to_owned(), Err(error));
        self
    }

    /// Number of `geocode` calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Addresses queried so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

#[async_trait(?Send)]
impl GeocodingProvider for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocodingError> {
        self.calls.set(self.calls.get() + 1);
        self.queries.borrow_mut().push(address.to_owned());
        self.entries
            .get(address)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Stub directions provider returning a configured route or error.
#[derive(Debug)]
pub struct StubDirections {
    response: Result<PlannedRoute, DirectionsError>,
    calls: Cell<usize>,
    last_request: RefCell<Option<DirectionsRequest>>,
}

impl StubDirections {
    /// Answer every request with `route`.
    #[must_use]
    pub fn with_route(route: PlannedRoute) -> Self {
        Self {
            response: Ok(route),
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    /// Answer every request with `error`.
    #[must_use]
    pub fn with_error(error: DirectionsError) -> Self {
        Self {
            response: Err(error),
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    /// A two-vertex route between central Delhi landmarks.
    #[must_use]
    pub fn straight_line() -> Self {
        Self::with_route(sample_route())
    }

    /// Number of `route` calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<DirectionsRequest> {
        self.last_request.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DirectionsProvider for StubDirections {
    async fn route(&self, request: &DirectionsRequest) -> Result<PlannedRoute, DirectionsError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.response.clone()
    }
}

/// A short route from Connaught Place towards Lajpat Nagar.
#[must_use]
pub fn sample_route() -> PlannedRoute {
    PlannedRoute::new(
        LineString::from(vec![(77.2167, 28.6315), (77.2431, 28.5665)]),
        12_500.0,
        Duration::from_secs(28 * 60),
        0,
    )
}

/// Stub geolocation provider.
#[derive(Debug, Clone)]
pub struct StubGeolocation {
    response: StubFix,
    calls: Cell<usize>,
}

#[derive(Debug, Clone)]
enum StubFix {
    Position(Position),
    Error(GeolocationError),
    Never,
}

impl StubGeolocation {
    /// Report a fresh fix at `lat`, `lng`.
    #[must_use]
    pub fn at(lat: f64, lng: f64) -> Self {
        Self::with_position(Position::now(LatLng::new(lat, lng)))
    }

    /// Report the given fix verbatim.
    #[must_use]
    pub const fn with_position(position: Position) -> Self {
        Self {
            response: StubFix::Position(position),
            calls: Cell::new(0),
        }
    }

    /// Fail with `error`.
    #[must_use]
    pub const fn with_error(error: GeolocationError) -> Self {
        Self {
            response: StubFix::Error(error),
            calls: Cell::new(0),
        }
    }

    /// Never answer, so callers hit their timeout.
    #[must_use]
    pub const fn never() -> Self {
        Self {
            response: StubFix::Never,
            calls: Cell::new(0),
        }
    }

    /// Number of queries made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl GeolocationProvider for StubGeolocation {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, GeolocationError> {
        self.calls.set(self.calls.get() + 1);
        match &self.response {
            StubFix::Position(position) => Ok(*position),
            StubFix::Error(error) => Err(error.clone()),
            StubFix::Never => std::future::pending().await,
        }
    }
}
