//! Stub providers and fixture files for CLI tests.

use std::io::Write;
use std::rc::Rc;

use camino::{Utf8Path, Utf8PathBuf};
use saferoute_core::test_support::{StubDirections, StubGeocoder};
use saferoute_core::{DirectionsProvider, GeocodingProvider};
use tempfile::TempDir;

use crate::CliError;
use crate::route::{RouteConfig, RouteProviders};

pub(super) const CONNAUGHT_PLACE: &str = "Connaught Place, Delhi";
pub(super) const LAJPAT_NAGAR: &str = "Lajpat Nagar, Delhi";

/// Providers answering from in-memory stubs.
pub(super) struct StubRouteProviders {
    pub(super) geocoder: Rc<StubGeocoder>,
    pub(super) directions: Rc<StubDirections>,
}

impl StubRouteProviders {
    /// Known Delhi addresses and the sample straight-line route.
    pub(super) fn delhi() -> Self {
        let geocoder = StubGeocoder::new()
            .with_match(CONNAUGHT_PLACE, 28.6315, 77.2167, "Connaught Place, New Delhi")
            .with_match(LAJPAT_NAGAR, 28.5665, 77.2431, "Lajpat Nagar, New Delhi");
        Self {
            geocoder: Rc::new(geocoder),
            directions: Rc::new(StubDirections::straight_line()),
        }
    }
}

impl RouteProviders for StubRouteProviders {
    fn geocoder(&self, _config: &RouteConfig) -> Result<Rc<dyn GeocodingProvider>, CliError> {
        Ok(self.geocoder.clone())
    }

    fn directions(&self, _config: &RouteConfig) -> Result<Rc<dyn DirectionsProvider>, CliError> {
        Ok(self.directions.clone())
    }
}

/// A temporary directory holding zone feeds.
pub(super) struct FeedDir {
    dir: TempDir,
}

impl FeedDir {
    pub(super) fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub(super) fn root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().to_path_buf()).expect("utf-8 workspace")
    }

    /// Write `contents` to `name` and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root().join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    let mut file = std::fs::File::create(path).expect("create file");
    file.write_all(contents).expect("write file");
}

/// A one-zone feed far from the sample route.
pub(super) const SINGLE_ZONE_FEED: &str = r#"[
    {"id": "hk", "name": "Hauz Khas", "riskLevel": "medium", "incidents": 4,
     "lastUpdated": "3 min ago", "lat": 28.5494, "lng": 77.2001}
]"#;
