use thiserror::Error;

/// Errors raised while loading zones into a
/// [`SafetyZoneRegistry`](crate::SafetyZoneRegistry).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZoneSourceError {
    /// Two zones shared an identifier.
    #[error("duplicate safety zone id {id:?}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A zone had an empty identifier.
    #[error("safety zone at position {index} has an empty id")]
    EmptyId {
        /// Position of the offending zone in the source.
        index: usize,
    },
    /// A zone centre was not a valid WGS84 coordinate.
    #[error("safety zone {id:?} has an invalid position ({lat}, {lng})")]
    InvalidPosition {
        /// Identifier of the offending zone.
        id: String,
        /// Latitude as supplied.
        lat: f64,
        /// Longitude as supplied.
        lng: f64,
    },
    /// The backing feed could not be read.
    #[error("failed to read zone feed {location}: {source}")]
    Read {
        /// Where the feed was read from.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The backing feed was not valid zone JSON.
    #[cfg(feature = "serde")]
    #[error("failed to parse zone feed: {0}")]
    Parse(#[from] serde_json::Error),
}
