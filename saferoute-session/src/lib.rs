//! Request orchestration for the SafeRoute engine.
//!
//! [`RequestCoordinator`] owns the [`SessionState`] a renderer draws from and
//! is the only place it changes. It resolves two free-text addresses
//! concurrently with [`AddressResolver`], waits on the [`ReadinessGate`]
//! before asking the [`RoutePlanner`] for a route, and scores the result.
//! Every operation is stamped with a generation so that a slow, stale answer
//! never overwrites a newer one.
//!
//! Everything runs on a single-threaded cooperative scheduler. Providers are
//! shared through `Rc`, and the background location lookup is spawned with
//! `tokio::task::spawn_local`, so callers must drive the coordinator inside a
//! [`tokio::task::LocalSet`] when they use it.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use saferoute_core::SafetyZoneRegistry;
//! use saferoute_core::test_support::{StubDirections, StubGeocoder};
//! use saferoute_session::{Phase, RequestCoordinator};
//!
//! let geocoder = StubGeocoder::new()
//!     .with_match("Connaught Place", 28.6315, 77.2167, "Connaught Place")
//!     .with_match("Lajpat Nagar", 28.5665, 77.2431, "Lajpat Nagar");
//! let mut coordinator = RequestCoordinator::new(
//!     Rc::new(geocoder),
//!     Rc::new(StubDirections::straight_line()),
//!     SafetyZoneRegistry::reference(),
//! );
//!
//! let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! runtime.block_on(async {
//!     coordinator.on_map_ready().await;
//!     coordinator.submit("Connaught Place", "Lajpat Nagar").await.unwrap();
//! });
//! assert_eq!(coordinator.state().phase, Phase::Ready);
//! assert_eq!(coordinator.state().badge().map(|b| b.label), Some("SAFE ROUTE"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coordinator;
mod error;
mod gate;
mod location;
mod planner;
mod resolver;
mod state;
mod view;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinator::{RequestCoordinator, ResolvedPair, SubmitOutcome, Submission};
pub use error::{
    InputField, ProviderInitError, ResolutionError, RouteComputationError, SubmitError,
    UNRESOLVED_LOCATIONS_MESSAGE,
};
pub use gate::{GateState, ReadinessGate};
pub use location::{LocationLookup, LookupStatus, locate};
pub use planner::{PlanOutcome, RoutePlanner};
pub use resolver::AddressResolver;
pub use state::{Phase, SessionState};
pub use view::{
    Camera, DEFAULT_CENTER, DEFAULT_ZOOM, LOCATED_ZOOM, MapMarker, MapViewState, ZoneOverlay,
};
