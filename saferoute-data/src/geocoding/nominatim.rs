//! [`GeocodingProvider`] backed by Nominatim's `/search` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use saferoute_core::{GeocodeCandidate, GeocodingError, GeocodingProvider};
use url::Url;

use super::response::SearchHit;
use crate::error::{ProviderBuildError, convert_reqwest_error, parse_base_url};
use crate::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Service root, e.g. `"https://nominatim.openstreetmap.org"`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with every request; Nominatim's usage policy
    /// requires an identifying one.
    pub user_agent: String,
    /// Maximum number of candidates requested.
    pub limit: u8,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            limit: 1,
        }
    }
}

impl NominatimConfig {
    /// Configuration for the service at `base_url`.
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

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the candidate limit; zero is raised to one.
    #[must_use]
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit.max(1);
        self
    }
}

/// Nominatim geocoder.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    config: NominatimConfig,
    base: Url,
}

impl NominatimGeocoder {
    /// Geocoder for the service at `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(NominatimConfig::new(base_url))
    }

    /// Geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ProviderBuildError> {
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

    /// Build the search URL for `address`.
    ///
    /// Format: `{base_url}/search?q={address}&format=jsonv2&limit={limit}`.
    fn build_search_url(&self, address: &str) -> Result<Url, GeocodingError> {
        let mut url = self
            .base
            .join("search")
            .map_err(|err| GeocodingError::ParseError {
                message: format!("cannot build search URL: {err}"),
            })?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "jsonv2")
            .append_pair("limit", &self.config.limit.to_string());
        Ok(url)
    }
}

/// Turn a decoded search response into candidates, best first.
///
/// Hits with unusable coordinates are skipped; the whole response only
/// fails when every hit is unusable.
pub(crate) fn candidates_from_hits(
    hits: Vec<SearchHit>,
) -> Result<Vec<GeocodeCandidate>, GeocodingError> {
    let total = hits.len();
    let mut last_error = None;
    let candidates: Vec<GeocodeCandidate> = hits
        .into_iter()
        .filter_map(|hit| match hit.into_candidate() {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                debug!("skipping geocoding hit: {err}");
                last_error = Some(err);
                None
            }
        })
        .collect();
    match last_error {
        Some(err) if candidates.is_empty() && total > 0 => Err(err),
        _ => Ok(candidates),
    }
}

#[async_trait(?Send)]
impl GeocodingProvider for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeCandidate>, GeocodingError> {
        let url = self.build_search_url(address)?;
        let url_text = url.to_string();
        debug!("geocoding via {url_text}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, &url_text, self.config.timeout))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, &url_text, self.config.timeout))?;

        let hits: Vec<SearchHit> =
            response
                .json()
                .await
                .map_err(|err| GeocodingError::ParseError {
                    message: err.to_string(),
                })?;

        candidates_from_hits(hits)
    }
}
