//! Zones command implementation for the SafeRoute CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saferoute_core::{RiskLevel, SafetyZone};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::{ARG_ZONES, CliError, load_registry};

/// CLI arguments for the `zones` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the safety zones with their marker colours")]
#[ortho_config(prefix = "SAFEROUTE")]
pub(crate) struct ZonesArgs {
    /// JSON zone feed; the built-in Delhi zones are used when absent.
    #[arg(long = ARG_ZONES, value_name = "path")]
    #[serde(default)]
    pub(crate) zones: Option<Utf8PathBuf>,
}

/// One row of `saferoute zones` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ZoneListing<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) risk_level: RiskLevel,
    pub(crate) badge: &'static str,
    pub(crate) color: &'static str,
    pub(crate) incidents: u32,
    pub(crate) last_updated: &'a str,
    pub(crate) lat: f64,
    pub(crate) lng: f64,
}

impl<'a> From<&'a SafetyZone> for ZoneListing<'a> {
    fn from(zone: &'a SafetyZone) -> Self {
        Self {
            id: &zone.id,
            name: &zone.name,
            risk_level: zone.risk_level,
            badge: zone.risk_level.badge_label(),
            color: zone.color().hex(),
            incidents: zone.incidents,
            last_updated: &zone.last_updated,
            lat: zone.lat,
            lng: zone.lng,
        }
    }
}

pub(crate) fn run_zones(args: ZonesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let registry = load_registry(merged.zones.as_deref())?;
    let listing: Vec<ZoneListing<'_>> = registry.zones().iter().map(ZoneListing::from).collect();
    write_json(writer, &listing)
}
