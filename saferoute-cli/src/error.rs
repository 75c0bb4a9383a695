//! Error types emitted by the SafeRoute CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use saferoute_core::ZoneSourceError;
use saferoute_data::ProviderBuildError;
use saferoute_session::{ResolutionError, RouteComputationError, SubmitError};
use thiserror::Error;

/// Errors emitted by the SafeRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A `--waypoint` value is not `lat,lng[,name]`.
    #[error("invalid waypoint {value:?}: {reason}")]
    InvalidWaypoint { value: String, reason: &'static str },
    /// The zone feed could not be loaded or failed validation.
    #[error("failed to load zones from {path:?}: {source}")]
    LoadZones {
        path: Utf8PathBuf,
        #[source]
        source: ZoneSourceError,
    },
    /// Constructing an HTTP provider failed.
    #[error("failed to build {service} provider for {base_url:?}: {source}")]
    BuildProvider {
        service: &'static str,
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The addresses were rejected before any lookup.
    #[error(transparent)]
    Submit(#[from] SubmitError),
    /// One or both addresses did not resolve.
    #[error("{}", .0.user_message())]
    Unresolved(#[from] ResolutionError),
    /// The directions service failed.
    #[error(transparent)]
    RouteFailed(#[from] RouteComputationError),
    /// The session finished without a route.
    #[error("no route was planned")]
    RouteNotPlanned,
    /// Serialising the report failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
