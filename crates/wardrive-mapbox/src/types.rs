//! Mapbox API response types.
//!
//! Directions responses carry a `code` string (`"Ok"` on success, an error
//! class like `"NoRoute"`/`"NoSegment"` otherwise) alongside the route
//! array; geometry uses GeoJSON `[longitude, latitude]` axis order. Step
//! maneuvers distinguish their class in `type` — `"arrive"` marks the
//! destination-reached announcement.

use serde::Deserialize;

/// Top-level envelope from the Directions API.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    pub code: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsRoute {
    pub geometry: RouteGeometry,

    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// GeoJSON line geometry.
#[derive(Debug, Deserialize)]
pub(crate) struct RouteGeometry {
    /// `[longitude, latitude]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteStep {
    pub maneuver: Maneuver,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Maneuver {
    /// Maneuver class, e.g. `"turn"`, `"continue"`, `"arrive"`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub instruction: String,
}

/// Top-level envelope from the Geocoding API.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<GeocodingFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingFeature {
    pub place_name: String,

    /// `[longitude, latitude]`.
    pub center: [f64; 2],
}
