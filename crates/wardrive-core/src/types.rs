//! Domain types flowing through the planning pipeline.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A single observed wireless network drawn from the search service.
///
/// Built once by the fetch layer and read-only from then on: the optimizer
/// reorders records, the renderers label them, nobody rewrites them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRecord {
    /// Service-unique network identifier (the BSSID for Wi-Fi rows).
    pub id: String,

    /// Trilaterated observation position.
    pub position: GeoPoint,

    /// Strongest observed signal in dBm; −100 when the service omits it.
    pub signal_dbm: i32,

    /// Whether the network advertises no encryption.
    pub is_open: bool,

    /// Advertised SSID, when broadcast.
    pub ssid: Option<String>,

    /// Remaining service fields, passed through untouched for renderers.
    #[serde(default)]
    pub raw_metadata: serde_json::Map<String, serde_json::Value>,
}

/// Which encryption class of networks a search should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkTypeFilter {
    Open,
    Secure,
    All,
}

/// A road-aligned path with turn-by-turn guidance.
///
/// Produced once per planned route. `points` is the stitched geometry from
/// the directions service (raw input coordinates for spans that could not
/// be routed); `instructions` is the deduplicated guidance text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnappedPath {
    pub points: Vec<GeoPoint>,
    pub instructions: Vec<String>,
}
