//! Marker icon descriptors.
//!
//! [`icon_for`] is a pure mapping from what a marker represents to how it
//! should look. The rendering surface turns a descriptor into pixels; this
//! crate never produces markup.

use crate::{RiskColor, RiskLevel, risk_color};

/// What a map marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// The device's current location.
    UserLocation,
    /// A safety zone, drawn in its risk colour with the incident count.
    Zone {
        /// Zone risk tier.
        risk_level: RiskLevel,
        /// Incident count printed on the marker.
        incidents: u32,
    },
    /// Route start.
    Origin,
    /// Route end.
    Destination,
}

/// Symbol drawn inside the marker circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A small white dot.
    Dot,
    /// A number, e.g. an incident count.
    Count(u32),
    /// A white diamond.
    Diamond,
    /// A white square.
    Square,
}

/// Rendering-independent description of a marker icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    /// Fill colour as a hex string.
    pub fill: &'static str,
    /// Outline colour as a hex string.
    pub stroke: &'static str,
    /// Square icon edge length in pixels.
    pub size_px: u32,
    /// Anchor offset from the top-left corner, in pixels.
    pub anchor_px: (u32, u32),
    /// Inner symbol.
    pub glyph: Glyph,
}

const WHITE: &str = "#FFFFFF";
const USER_BLUE: &str = "#3B82F6";
const MARKER_PX: u32 = 32;
const ZONE_MARKER_PX: u32 = 40;

const fn centred(fill: &'static str, size_px: u32, glyph: Glyph) -> IconDescriptor {
    IconDescriptor {
        fill,
        stroke: WHITE,
        size_px,
        anchor_px: (size_px / 2, size_px / 2),
        glyph,
    }
}

/// Describe the icon for a marker.
///
/// # Examples
///
/// ```rust
/// use saferoute_core::{Glyph, MarkerKind, RiskLevel, icon_for};
///
/// let icon = icon_for(MarkerKind::Zone { risk_level: RiskLevel::High, incidents: 15 });
/// assert_eq!(icon.fill, "#EF4444");
/// assert_eq!(icon.glyph, Glyph::Count(15));
/// assert_eq!(icon.size_px, 40);
/// ```
#[must_use]
pub const fn icon_for(kind: MarkerKind) -> IconDescriptor {
    match kind {
        MarkerKind::UserLocation => centred(USER_BLUE, MARKER_PX, Glyph::Dot),
        MarkerKind::Zone {
            risk_level,
            incidents,
        } => centred(
            risk_color(risk_level).hex(),
            ZONE_MARKER_PX,
            Glyph::Count(incidents),
        ),
        MarkerKind::Origin => centred(RiskColor::Green.hex(), MARKER_PX, Glyph::Diamond),
        MarkerKind::Destination => centred(RiskColor::Red.hex(), MARKER_PX, Glyph::Square),
    }
}

/// Stroke styling for the rendered route polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    /// Stroke colour as a hex string.
    pub stroke_color: &'static str,
    /// Stroke width in pixels.
    pub stroke_weight: u32,
    /// Stroke opacity in `0.0..=1.0`.
    pub stroke_opacity: f32,
}

/// Polyline style used for every planned route.
pub const ROUTE_STYLE: RouteStyle = RouteStyle {
    stroke_color: "#7C3AED",
    stroke_weight: 6,
    stroke_opacity: 0.8,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RiskLevel::Low, "#10B981")]
    #[case(RiskLevel::Medium, "#F59E0B")]
    #[case(RiskLevel::High, "#EF4444")]
    fn zone_icons_follow_risk_colour(#[case] risk_level: RiskLevel, #[case] fill: &str) {
        let icon = icon_for(MarkerKind::Zone {
            risk_level,
            incidents: 3,
        });
        assert_eq!(icon.fill, fill);
        assert_eq!(icon.anchor_px, (20, 20));
    }

    #[rstest]
    #[case(MarkerKind::UserLocation, USER_BLUE, Glyph::Dot)]
    #[case(MarkerKind::Origin, "#10B981", Glyph::Diamond)]
    #[case(MarkerKind::Destination, "#EF4444", Glyph::Square)]
    fn point_markers(#[case] kind: MarkerKind, #[case] fill: &str, #[case] glyph: Glyph) {
        let icon = icon_for(kind);
        assert_eq!(icon.fill, fill);
        assert_eq!(icon.glyph, glyph);
        assert_eq!(icon.size_px, 32);
        assert_eq!(icon.anchor_px, (16, 16));
        assert_eq!(icon.stroke, WHITE);
    }
}
