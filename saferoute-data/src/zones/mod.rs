//! Zone feeds stored outside the binary.

mod json;

pub use json::JsonZoneSource;
