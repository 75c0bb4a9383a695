//! Route command implementation for the SafeRoute CLI.

use std::io::Write;
use std::rc::Rc;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use saferoute_core::{
    DirectionsProvider, GeocodingProvider, RouteInfo, RoutePoint, RouteWidgetOptions,
    SafetyZoneRegistry, SampleRouteScorer,
};
use saferoute_data::{NominatimConfig, NominatimGeocoder, OsrmConfig, OsrmDirectionsProvider};
use saferoute_scorer::{ZoneExposure, ZoneExposureScorer};
use saferoute_session::{RequestCoordinator, SessionState, SubmitError, SubmitOutcome};
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::waypoint::parse_waypoint;
use crate::{
    ARG_DESTINATION, ARG_NOMINATIM_BASE_URL, ARG_ORIGIN, ARG_OSRM_BASE_URL, ARG_SCORER,
    ARG_WAYPOINT, ARG_ZONES, CliError, ENV_DESTINATION, ENV_ORIGIN, load_registry,
};

/// How a planned route is rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ScorerKind {
    /// Fixed sample metrics.
    Sample,
    /// Penalise proximity to risk zones.
    #[default]
    Exposure,
}

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Geocode the origin and destination, plan a driving route \
                 through OSRM and print the scored session summary as JSON. \
                 Options can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Plan and score a route between two addresses"
)]
#[ortho_config(prefix = "SAFEROUTE")]
pub(crate) struct RouteArgs {
    /// Address the route starts from.
    #[arg(long = ARG_ORIGIN, value_name = "address")]
    #[serde(default)]
    pub(crate) origin: Option<String>,
    /// Address the route ends at.
    #[arg(long = ARG_DESTINATION, value_name = "address")]
    #[serde(default)]
    pub(crate) destination: Option<String>,
    /// Intermediate stop; may be repeated.
    #[arg(long = ARG_WAYPOINT, value_name = "lat,lng[,name]")]
    #[serde(default)]
    pub(crate) waypoints: Vec<String>,
    /// Base URL for the Nominatim server.
    #[arg(long = ARG_NOMINATIM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_base_url: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// JSON zone feed; the built-in Delhi zones are used when absent.
    #[arg(long = ARG_ZONES, value_name = "path")]
    #[serde(default)]
    pub(crate) zones: Option<Utf8PathBuf>,
    /// Route scorer.
    #[arg(long = ARG_SCORER, value_enum)]
    #[serde(default)]
    pub(crate) scorer: Option<ScorerKind>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) waypoints: Vec<RoutePoint>,
    pub(crate) nominatim_base_url: String,
    pub(crate) osrm_base_url: String,
    pub(crate) zones: Option<Utf8PathBuf>,
    pub(crate) scorer: ScorerKind,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let origin = args.origin.ok_or(CliError::MissingArgument {
            field: ARG_ORIGIN,
            env: ENV_ORIGIN,
        })?;
        let destination = args.destination.ok_or(CliError::MissingArgument {
            field: ARG_DESTINATION,
            env: ENV_DESTINATION,
        })?;
        let waypoints = args
            .waypoints
            .iter()
            .enumerate()
            .map(|(index, value)| parse_waypoint(value, index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        let nominatim_base_url = args
            .nominatim_base_url
            .unwrap_or_else(|| NominatimConfig::default().base_url);
        let osrm_base_url = args
            .osrm_base_url
            .unwrap_or_else(|| OsrmConfig::default().base_url);

        Ok(Self {
            origin,
            destination,
            waypoints,
            nominatim_base_url,
            osrm_base_url,
            zones: args.zones,
            scorer: args.scorer.unwrap_or_default(),
        })
    }
}

/// Builds the providers for the current route invocation.
pub(crate) trait RouteProviders {
    fn geocoder(&self, config: &RouteConfig) -> Result<Rc<dyn GeocodingProvider>, CliError>;
    fn directions(&self, config: &RouteConfig) -> Result<Rc<dyn DirectionsProvider>, CliError>;
}

pub(crate) struct HttpRouteProviders;

impl RouteProviders for HttpRouteProviders {
    fn geocoder(&self, config: &RouteConfig) -> Result<Rc<dyn GeocodingProvider>, CliError> {
        let geocoder = NominatimGeocoder::new(config.nominatim_base_url.clone()).map_err(
            |source| CliError::BuildProvider {
                service: "geocoding",
                base_url: config.nominatim_base_url.clone(),
                source,
            },
        )?;
        Ok(Rc::new(geocoder))
    }

    fn directions(&self, config: &RouteConfig) -> Result<Rc<dyn DirectionsProvider>, CliError> {
        let provider = OsrmDirectionsProvider::new(config.osrm_base_url.clone()).map_err(
            |source| CliError::BuildProvider {
                service: "directions",
                base_url: config.osrm_base_url.clone(),
                source,
            },
        )?;
        Ok(Rc::new(provider))
    }
}

/// Summary printed by `saferoute route`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteReport {
    pub(crate) origin: RoutePoint,
    pub(crate) destination: RoutePoint,
    /// Stops in visiting order.
    pub(crate) waypoints: Vec<RoutePoint>,
    pub(crate) route: RouteInfo,
    pub(crate) badge: &'static str,
    /// Zones within reach of the route, in registry order.
    pub(crate) nearby_zones: Vec<ZoneExposure>,
}

impl RouteReport {
    fn from_session(
        state: &SessionState,
        registry: &SafetyZoneRegistry,
        info: RouteInfo,
    ) -> Result<Self, CliError> {
        let (Some(origin), Some(destination), Some(route)) = (
            state.origin_point.clone(),
            state.destination_point.clone(),
            state.route.as_ref(),
        ) else {
            return Err(CliError::RouteNotPlanned);
        };
        let waypoints = route
            .stop_order
            .iter()
            .filter_map(|&index| state.waypoints.get(index))
            .cloned()
            .collect();
        let nearby_zones = ZoneExposureScorer::default()
            .exposures(route, registry.zones())
            .into_iter()
            .filter(|exposure| exposure.contribution > 0.0)
            .collect();
        Ok(Self {
            origin,
            destination,
            waypoints,
            badge: info.badge().label,
            route: info,
            nearby_zones,
        })
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_route_with(args, &HttpRouteProviders, writer)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    providers: &dyn RouteProviders,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_route(&config, providers)?;
    write_json(writer, &report)
}

pub(crate) fn execute_route(
    config: &RouteConfig,
    providers: &dyn RouteProviders,
) -> Result<RouteReport, CliError> {
    let registry = load_registry(config.zones.as_deref())?;
    let coordinator = RequestCoordinator::new(
        providers.geocoder(config)?,
        providers.directions(config)?,
        registry,
    );
    let mut coordinator = match config.scorer {
        ScorerKind::Sample => coordinator.with_scorer(SampleRouteScorer),
        ScorerKind::Exposure => coordinator.with_scorer(ZoneExposureScorer::default()),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let local = tokio::task::LocalSet::new();
    let outcome = local.block_on(&runtime, plan(&mut coordinator, config))?;

    match outcome {
        SubmitOutcome::Routed(info) => {
            info!(
                "planned {} route from {:?} to {:?}",
                info.distance, config.origin, config.destination
            );
            RouteReport::from_session(coordinator.state(), coordinator.registry(), info)
        }
        SubmitOutcome::Unresolved(err) => Err(CliError::Unresolved(err)),
        SubmitOutcome::RouteFailed(err) => Err(CliError::RouteFailed(err)),
        SubmitOutcome::AwaitingMap
        | SubmitOutcome::ProviderUnavailable(_)
        | SubmitOutcome::Superseded => Err(CliError::RouteNotPlanned),
    }
}

/// Drive one submission. There is no map surface, so the readiness gate is
/// opened up front.
async fn plan(
    coordinator: &mut RequestCoordinator,
    config: &RouteConfig,
) -> Result<SubmitOutcome, SubmitError> {
    coordinator.on_map_ready().await;
    if config.waypoints.is_empty() {
        return coordinator
            .submit(&config.origin, &config.destination)
            .await;
    }

    let submission = coordinator.begin_submit(&config.origin, &config.destination)?;
    let resolved = coordinator.resolve_submission(&submission).await;
    let (Some(origin), Some(destination)) = (resolved.origin.clone(), resolved.destination.clone())
    else {
        return Ok(coordinator.apply_resolution(resolved).await);
    };
    let options = RouteWidgetOptions {
        origin: Some(origin),
        destination: Some(destination),
        waypoints: config.waypoints.clone(),
        show_directions: true,
        ..RouteWidgetOptions::default()
    };
    Ok(coordinator
        .show_route(options)
        .await
        .unwrap_or(SubmitOutcome::Superseded))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
