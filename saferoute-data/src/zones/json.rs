//! [`ZoneSource`] reading a camelCase JSON array from disk.

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use saferoute_core::{SafetyZone, ZoneSource, ZoneSourceError, zones_from_json};

/// Zone feed stored as a JSON file.
///
/// The file holds an array of zones with `id`, `name`, `riskLevel`,
/// `incidents`, `lastUpdated`, `lat` and `lng` keys. It is read each time
/// [`ZoneSource::load`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonZoneSource {
    path: Utf8PathBuf,
}

impl JsonZoneSource {
    /// Feed stored at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the feed.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read(&self) -> std::io::Result<String> {
        let mut file = fs_utf8::File::open_ambient(&self.path, ambient_authority())?;
        let mut payload = String::new();
        file.read_to_string(&mut payload)?;
        Ok(payload)
    }
}

impl ZoneSource for JsonZoneSource {
    fn load(&self) -> Result<Vec<SafetyZone>, ZoneSourceError> {
        let payload = self.read().map_err(|source| ZoneSourceError::Read {
            location: self.path.to_string(),
            source,
        })?;
        let zones = zones_from_json(&payload)?;
        debug!("loaded {} zones from {}", zones.len(), self.path);
        Ok(zones)
    }
}
