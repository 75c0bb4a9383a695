//! Compute multi-stop driving routes.
//!
//! The [`DirectionsProvider`] trait abstracts an external directions service.
//! A [`DirectionsRequest`] names the origin, destination and intermediate
//! waypoints; the provider answers with a [`PlannedRoute`] whose
//! [`stop_order`](PlannedRoute::stop_order) reports how waypoints were
//! reordered when optimisation is enabled.

mod error;
mod provider;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, DirectionsRequest, PlannedRoute, TravelMode};
