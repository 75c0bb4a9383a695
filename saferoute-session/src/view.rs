//! Camera, zone selection and marker layout for the map surface.

use saferoute_core::{
    IconDescriptor, LatLng, MarkerKind, RiskColor, RiskLevel, RoutePoint, SafetyZone, icon_for,
};

/// Map centre used until the device location is known (central Delhi).
pub const DEFAULT_CENTER: LatLng = LatLng::new(28.6139, 77.2090);

/// Zoom level for the default centre.
pub const DEFAULT_ZOOM: u8 = 11;

/// Zoom level once centred on the device location.
pub const LOCATED_ZOOM: u8 = 14;

/// Where the map looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Map centre.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: u8,
}

/// Details panel for the selected zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneOverlay {
    /// Id of the zone the overlay describes.
    pub zone_id: String,
    /// Zone name.
    pub title: String,
    /// Risk badge text, e.g. `"HIGH RISK"`.
    pub badge_label: &'static str,
    /// Badge colour.
    pub color: RiskColor,
    /// Recent incident count.
    pub incidents: u32,
    /// "Last updated" text.
    pub last_updated: String,
    /// Whether to offer an "avoid this area" action.
    pub avoid_area_action: bool,
    /// Zone centre.
    pub position: LatLng,
}

impl ZoneOverlay {
    fn for_zone(zone: &SafetyZone) -> Self {
        Self {
            zone_id: zone.id.clone(),
            title: zone.name.clone(),
            badge_label: zone.risk_level.badge_label(),
            color: zone.color(),
            incidents: zone.incidents,
            last_updated: zone.last_updated.clone(),
            avoid_area_action: zone.risk_level == RiskLevel::High,
            position: zone.position(),
        }
    }
}

/// A marker to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Marker position.
    pub position: LatLng,
    /// Hover title.
    pub title: String,
    /// Icon to draw.
    pub icon: IconDescriptor,
}

/// Camera and selection state of the map.
///
/// At most one zone is selected at a time: [`MapViewState::select_zone`]
/// replaces any previous selection wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapViewState {
    selected_zone: Option<SafetyZone>,
    user_location: Option<LatLng>,
}

impl MapViewState {
    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.user_location.map_or(
            Camera {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            |center| Camera {
                center,
                zoom: LOCATED_ZOOM,
            },
        )
    }

    /// The selected zone, if any.
    #[must_use]
    pub const fn selected_zone(&self) -> Option<&SafetyZone> {
        self.selected_zone.as_ref()
    }

    /// The device location, if known.
    #[must_use]
    pub const fn user_location(&self) -> Option<LatLng> {
        self.user_location
    }

    /// Replace the selection with `zone`.
    pub fn select_zone(&mut self, zone: SafetyZone) {
        self.selected_zone = Some(zone);
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selected_zone = None;
    }

    /// Centre on the device location.
    ///
    /// Invalid coordinates are ignored and leave the camera where it was.
    /// Returns whether the location was stored.
    pub fn set_user_location(&mut self, location: LatLng) -> bool {
        if !location.is_valid() {
            return false;
        }
        self.user_location = Some(location);
        true
    }

    /// Overlay for the selected zone.
    #[must_use]
    pub fn overlay(&self) -> Option<ZoneOverlay> {
        self.selected_zone.as_ref().map(ZoneOverlay::for_zone)
    }

    /// Markers for the device location, every zone and the route endpoints.
    #[must_use]
    pub fn markers(
        &self,
        zones: &[SafetyZone],
        origin: Option<&RoutePoint>,
        destination: Option<&RoutePoint>,
    ) -> Vec<MapMarker> {
        let mut markers = Vec::with_capacity(zones.len() + 3);
        if let Some(location) = self.user_location {
            markers.push(MapMarker {
                position: location,
                title: "Your location".to_owned(),
                icon: icon_for(MarkerKind::UserLocation),
            });
        }
        markers.extend(zones.iter().map(|zone| MapMarker {
            position: zone.position(),
            title: zone.name.clone(),
            icon: icon_for(MarkerKind::Zone {
                risk_level: zone.risk_level,
                incidents: zone.incidents,
            }),
        }));
        if let Some(point) = origin {
            markers.push(MapMarker {
                position: point.lat_lng(),
                title: format!("Origin: {}", point.name),
                icon: icon_for(MarkerKind::Origin),
            });
        }
        if let Some(point) = destination {
            markers.push(MapMarker {
                position: point.lat_lng(),
                title: format!("Destination: {}", point.name),
                icon: icon_for(MarkerKind::Destination),
            });
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use saferoute_core::{Glyph, SafetyZoneRegistry};

    #[fixture]
    fn registry() -> SafetyZoneRegistry {
        SafetyZoneRegistry::reference()
    }

    fn zone(registry: &SafetyZoneRegistry, id: &str) -> SafetyZone {
        registry.get(id).cloned().expect("reference zone exists")
    }

    #[rstest]
    fn default_camera_is_central_delhi() {
        let camera = MapViewState::default().camera();
        assert_eq!(camera.center, LatLng::new(28.6139, 77.2090));
        assert_eq!(camera.zoom, 11);
    }

    #[rstest]
    fn user_location_recentres() {
        let mut view = MapViewState::default();
        assert!(view.set_user_location(LatLng::new(12.9, 77.6)));
        let camera = view.camera();
        assert_eq!(camera.center, LatLng::new(12.9, 77.6));
        assert_eq!(camera.zoom, 14);
    }

    #[rstest]
    fn invalid_location_is_ignored() {
        let mut view = MapViewState::default();
        assert!(!view.set_user_location(LatLng::new(f64::NAN, 77.6)));
        assert_eq!(view.camera().zoom, DEFAULT_ZOOM);
    }

    #[rstest]
    fn high_risk_overlay_offers_avoidance(registry: SafetyZoneRegistry) {
        let mut view = MapViewState::default();
        view.select_zone(zone(&registry, "4"));
        let overlay = view.overlay().expect("zone selected");
        assert_eq!(overlay.title, "Paharganj");
        assert_eq!(overlay.badge_label, "HIGH RISK");
        assert_eq!(overlay.color, RiskColor::Red);
        assert_eq!(overlay.incidents, 15);
        assert!(overlay.avoid_area_action);
    }

    #[rstest]
    fn reselection_replaces_overlay(registry: SafetyZoneRegistry) {
        let mut view = MapViewState::default();
        view.select_zone(zone(&registry, "4"));
        view.select_zone(zone(&registry, "1"));
        let overlay = view.overlay().expect("zone selected");
        assert_eq!(overlay, ZoneOverlay::for_zone(&zone(&registry, "1")));
        assert!(!overlay.avoid_area_action);
        assert_eq!(view.selected_zone().map(|z| z.id.as_str()), Some("1"));
    }

    #[rstest]
    fn clearing_selection_removes_overlay(registry: SafetyZoneRegistry) {
        let mut view = MapViewState::default();
        view.select_zone(zone(&registry, "3"));
        view.clear_selection();
        assert_eq!(view.overlay(), None);
    }

    #[rstest]
    fn markers_cover_every_entity(registry: SafetyZoneRegistry) {
        let mut view = MapViewState::default();
        view.set_user_location(LatLng::new(28.61, 77.20));
        let origin = RoutePoint::new(28.6315, 77.2167, "Connaught Place");
        let destination = RoutePoint::new(28.5665, 77.2431, "Lajpat Nagar");
        let markers = view.markers(registry.zones(), Some(&origin), Some(&destination));

        assert_eq!(markers.len(), registry.len() + 3);
        assert_eq!(markers[0].icon, icon_for(MarkerKind::UserLocation));
        assert_eq!(markers[4].title, "Paharganj");
        assert_eq!(markers[4].icon.glyph, Glyph::Count(15));
        let origin_marker = &markers[markers.len() - 2];
        assert_eq!(origin_marker.title, "Origin: Connaught Place");
        assert_eq!(origin_marker.icon.glyph, Glyph::Diamond);
        let destination_marker = &markers[markers.len() - 1];
        assert_eq!(destination_marker.title, "Destination: Lajpat Nagar");
        assert_eq!(destination_marker.icon.glyph, Glyph::Square);
    }

    #[rstest]
    fn markers_without_location_or_route(registry: SafetyZoneRegistry) {
        let markers = MapViewState::default().markers(registry.zones(), None, None);
        assert_eq!(markers.len(), registry.len());
    }
}
