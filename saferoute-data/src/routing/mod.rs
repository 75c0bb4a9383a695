//! Directions from an OSRM routing server.
//!
//! # Example
//!
//! ```no_run
//! use saferoute_core::{DirectionsProvider, DirectionsRequest, RoutePoint};
//! use saferoute_data::routing::OsrmDirectionsProvider;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OsrmDirectionsProvider::new("http://localhost:5000")?;
//! let request = DirectionsRequest::driving(
//!     RoutePoint::new(28.6315, 77.2167, "Connaught Place"),
//!     RoutePoint::new(28.5665, 77.2431, "Lajpat Nagar"),
//!     Vec::new(),
//! );
//! let route = provider.route(&request).await?;
//! println!("{} m", route.distance_m);
//! # Ok(())
//! # }
//! ```

pub mod osrm;
mod provider;

pub use provider::{
    DEFAULT_OSRM_URL, OsrmConfig, OsrmDirectionsProvider, describe_stops, route_from_response,
    trip_from_response,
};
