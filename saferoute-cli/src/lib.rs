//! Command-line interface for the SafeRoute engine.
//!
//! `saferoute route` geocodes two addresses, plans a driving route through
//! OSRM and prints the scored session summary as JSON. `saferoute zones`
//! lists the safety-zone registry with its marker colours.
#![forbid(unsafe_code)]

mod error;
mod output;
mod route;
mod waypoint;
mod zones;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use saferoute_core::SafetyZoneRegistry;
use saferoute_data::JsonZoneSource;

pub use error::CliError;

pub(crate) const ARG_ORIGIN: &str = "origin";
pub(crate) const ARG_DESTINATION: &str = "destination";
pub(crate) const ARG_WAYPOINT: &str = "waypoint";
pub(crate) const ARG_NOMINATIM_BASE_URL: &str = "nominatim-base-url";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_ZONES: &str = "zones";
pub(crate) const ARG_SCORER: &str = "scorer";
pub(crate) const ENV_ORIGIN: &str = "SAFEROUTE_CMDS_ROUTE_ORIGIN";
pub(crate) const ENV_DESTINATION: &str = "SAFEROUTE_CMDS_ROUTE_DESTINATION";

/// Run the SafeRoute CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments are invalid or the command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Route(args) => route::run_route(args, &mut stdout),
        Command::Zones(args) => zones::run_zones(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "saferoute",
    about = "Plan driving routes and rate them against known risk zones",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan and score a route between two addresses.
    Route(route::RouteArgs),
    /// List the safety zones.
    Zones(zones::ZonesArgs),
}

/// Load the zone registry from `path`, or the built-in Delhi set.
pub(crate) fn load_registry(path: Option<&Utf8Path>) -> Result<SafetyZoneRegistry, CliError> {
    let Some(path) = path else {
        return Ok(SafetyZoneRegistry::reference());
    };
    SafetyZoneRegistry::from_source(&JsonZoneSource::new(path)).map_err(|source| {
        CliError::LoadZones {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests;
