//! Parsing of `--waypoint lat,lng[,name]` values.

use saferoute_core::{LatLng, RoutePoint};

use crate::CliError;

/// Parse one waypoint. Unnamed stops are called `Stop {position}`,
/// counting from one.
pub(crate) fn parse_waypoint(value: &str, position: usize) -> Result<RoutePoint, CliError> {
    let invalid = |reason| CliError::InvalidWaypoint {
        value: value.to_owned(),
        reason,
    };
    let mut parts = value.splitn(3, ',');
    let lat = parse_degrees(parts.next()).ok_or_else(|| invalid("latitude is not a number"))?;
    let lng = parse_degrees(parts.next()).ok_or_else(|| invalid("longitude is not a number"))?;
    if !LatLng::new(lat, lng).is_valid() {
        return Err(invalid("coordinate is out of range"));
    }
    let name = parts
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(|| format!("Stop {position}"), str::to_owned);
    Ok(RoutePoint::new(lat, lng, name))
}

fn parse_degrees(part: Option<&str>) -> Option<f64> {
    part?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn named_waypoint() {
        let point = parse_waypoint("28.6129, 77.2295, India Gate", 1).expect("valid waypoint");
        assert_eq!(point, RoutePoint::new(28.6129, 77.2295, "India Gate"));
    }

    #[rstest]
    fn names_may_contain_commas() {
        let point = parse_waypoint("28.6,77.2,Khan Market, Delhi", 1).expect("valid waypoint");
        assert_eq!(point.name, "Khan Market, Delhi");
    }

    #[rstest]
    #[case("28.6,77.2", 2, "Stop 2")]
    #[case("28.6,77.2, ", 3, "Stop 3")]
    fn unnamed_waypoints_are_numbered(
        #[case] value: &str,
        #[case] position: usize,
        #[case] expected: &str,
    ) {
        let point = parse_waypoint(value, position).expect("valid waypoint");
        assert_eq!(point.name, expected);
    }

    #[rstest]
    #[case("north,77.2", "latitude is not a number")]
    #[case("28.6", "longitude is not a number")]
    #[case("91.0,77.2", "coordinate is out of range")]
    #[case("28.6,181.0", "coordinate is out of range")]
    fn rejects_malformed_values(#[case] value: &str, #[case] expected: &str) {
        match parse_waypoint(value, 1) {
            Err(CliError::InvalidWaypoint { reason, .. }) => assert_eq!(reason, expected),
            other => panic!("expected InvalidWaypoint, found {other:?}"),
        }
    }
}
