//! Error taxonomy for session operations.

use std::fmt;

use saferoute_core::DirectionsError;
use thiserror::Error;

/// Message shown when either address fails to resolve.
pub const UNRESOLVED_LOCATIONS_MESSAGE: &str =
    "Could not find one or both locations. Please try different addresses.";

/// Which text input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The "from" box.
    Origin,
    /// The "to" box.
    Destination,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        })
    }
}

/// A submission rejected before any provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// An address box was empty or whitespace.
    #[error("please enter both origin and destination ({field} is empty)")]
    Validation {
        /// The empty input.
        field: InputField,
    },
}

/// One or both addresses could not be geocoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "could not find one or both locations \
     (origin found: {origin_found}, destination found: {destination_found})"
)]
pub struct ResolutionError {
    /// Whether the origin resolved.
    pub origin_found: bool,
    /// Whether the destination resolved.
    pub destination_found: bool,
}

impl ResolutionError {
    /// Text surfaced to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        UNRESOLVED_LOCATIONS_MESSAGE
    }
}

/// The directions service failed to produce a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to compute route: {source}")]
pub struct RouteComputationError {
    /// Provider failure.
    #[from]
    pub source: DirectionsError,
}

/// The map provider failed its one-time initialisation.
///
/// Terminal for the session; recovery requires rebuilding the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("map provider failed to initialise: {reason}")]
pub struct ProviderInitError {
    /// Failure reported by the rendering surface.
    pub reason: String,
}
