//! Standalone Leaflet map of the planned route.

use wardrive_core::{GeoPoint, NetworkRecord, SnappedPath};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Survey route</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
  html, body, #map { height: 100%; margin: 0; }
</style>
</head>
<body>
<div id="map"></div>
<script>
  var map = L.map('map').setView(__CENTER__, 13);
  L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);

  var path = __PATH__;
  L.polyline(path, { color: 'orange', weight: 10 }).addTo(map);

  var stops = __STOPS__;
  stops.forEach(function (stop) {
    L.circleMarker([stop.lat, stop.lng], { radius: 4, color: '#1f6feb' })
      .bindPopup(stop.label)
      .addTo(map);
  });
</script>
</body>
</html>
"#;

/// Renders the snapped route and its stops as a self-contained HTML page.
///
/// The path polyline is the snapped geometry; each planned stop gets a
/// small marker labeled with its SSID (or BSSID for hidden networks).
#[must_use]
pub fn render_map(start: GeoPoint, route: &[NetworkRecord], snapped: &SnappedPath) -> String {
    let center = serde_json::json!([start.latitude, start.longitude]);
    let path: Vec<serde_json::Value> = snapped
        .points
        .iter()
        .map(|p| serde_json::json!([p.latitude, p.longitude]))
        .collect();
    let stops: Vec<serde_json::Value> = route
        .iter()
        .map(|record| {
            serde_json::json!({
                "lat": record.position.latitude,
                "lng": record.position.longitude,
                "label": record.ssid.as_deref().unwrap_or(&record.id),
            })
        })
        .collect();

    TEMPLATE
        .replace("__CENTER__", &center.to_string())
        .replace("__PATH__", &serde_json::Value::from(path).to_string())
        .replace("__STOPS__", &serde_json::Value::from(stops).to_string())
}
