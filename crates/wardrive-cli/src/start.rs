//! Start-location resolution: literal coordinates or a geocoded address.

use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use wardrive_core::GeoPoint;
use wardrive_mapbox::MapboxClient;

static LAT_LON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$")
        .expect("hard-coded pattern compiles")
});

/// Turns user input into a start coordinate.
///
/// Input shaped like `lat,lon` is taken literally; anything else goes to
/// the forward geocoder. An unresolvable address aborts the planning
/// attempt before any network search happens.
pub async fn resolve(mapbox: &MapboxClient, input: &str) -> anyhow::Result<GeoPoint> {
    if let Some(point) = parse_lat_lon(input) {
        return Ok(point);
    }
    mapbox
        .forward_geocode(input)
        .await
        .with_context(|| format!("resolving start location \"{input}\""))
}

fn parse_lat_lon(input: &str) -> Option<GeoPoint> {
    let captures = LAT_LON.captures(input)?;
    let latitude: f64 = captures[1].parse().ok()?;
    let longitude: f64 = captures[2].parse().ok()?;
    Some(GeoPoint::new(latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_coordinates() {
        let point = parse_lat_lon("36.1699,-115.1398").expect("should parse");
        assert!((point.latitude - 36.1699).abs() < 1e-12);
        assert!((point.longitude + 115.1398).abs() < 1e-12);
    }

    #[test]
    fn tolerates_whitespace_around_the_comma() {
        assert!(parse_lat_lon("  -33.86 , 151.21 ").is_some());
    }

    #[test]
    fn parses_integer_degrees() {
        let point = parse_lat_lon("36,-115").expect("should parse");
        assert!((point.latitude - 36.0).abs() < 1e-12);
    }

    #[test]
    fn street_addresses_do_not_parse_as_coordinates() {
        assert!(parse_lat_lon("200 S 3rd St, Las Vegas").is_none());
        assert!(parse_lat_lon("Fremont Street").is_none());
    }

    #[test]
    fn partial_numbers_do_not_parse() {
        assert!(parse_lat_lon("36.17,").is_none());
        assert!(parse_lat_lon("36.17").is_none());
        assert!(parse_lat_lon("1e5,2").is_none());
    }
}
