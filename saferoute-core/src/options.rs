//! Options accepted from the hosting surface.

use crate::RoutePoint;

/// Layout hint supplied by the host, e.g. `"h-96"`.
///
/// Opaque to this crate; carried through so renderers can read it back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DisplaySizeClass(pub String);

impl Default for DisplaySizeClass {
    fn default() -> Self {
        Self("h-96".to_owned())
    }
}

/// Direct coordinate input for a route view.
///
/// # Examples
///
/// ```rust
/// use saferoute_core::{RoutePoint, RouteWidgetOptions};
///
/// let options = RouteWidgetOptions::default()
///     .with_origin(RoutePoint::new(28.6315, 77.2167, "Connaught Place"))
///     .with_destination(RoutePoint::new(28.5665, 77.2431, "Lajpat Nagar"))
///     .with_show_directions(true);
/// assert!(options.wants_directions());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RouteWidgetOptions {
    /// Route start.
    pub origin: Option<RoutePoint>,
    /// Route end.
    pub destination: Option<RoutePoint>,
    /// Intermediate stops in caller order; may be empty.
    pub waypoints: Vec<RoutePoint>,
    /// Whether a route should be computed and shown.
    pub show_directions: bool,
    /// Layout hint for the renderer.
    pub display_size_class: DisplaySizeClass,
}

impl RouteWidgetOptions {
    /// Set the origin.
    #[must_use]
    pub fn with_origin(mut self, origin: RoutePoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the destination.
    #[must_use]
    pub fn with_destination(mut self, destination: RoutePoint) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Append a waypoint.
    #[must_use]
    pub fn with_waypoint(mut self, waypoint: RoutePoint) -> Self {
        self.waypoints.push(waypoint);
        self
    }

    /// Toggle route display.
    #[must_use]
    pub const fn with_show_directions(mut self, show_directions: bool) -> Self {
        self.show_directions = show_directions;
        self
    }

    /// Whether directions are requested and both endpoints are present.
    #[must_use]
    pub const fn wants_directions(&self) -> bool {
        self.show_directions && self.origin.is_some() && self.destination.is_some()
    }
}
