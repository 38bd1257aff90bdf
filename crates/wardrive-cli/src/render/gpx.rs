//! GPX 1.1 export: the snapped path as a track, the planned stops as
//! waypoints.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use wardrive_core::{NetworkRecord, SnappedPath};

/// Renders the route as a GPX 1.1 document.
///
/// Waypoints precede the track, as the schema requires. Stop names use the
/// SSID, falling back to the BSSID for hidden networks; text is escaped by
/// the XML writer.
pub fn render_track(route: &[NetworkRecord], snapped: &SnappedPath) -> anyhow::Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut gpx = BytesStart::new("gpx");
    gpx.push_attribute(("version", "1.1"));
    gpx.push_attribute(("creator", "wardrive"));
    gpx.push_attribute(("xmlns", "http://www.topografix.com/GPX/1/1"));
    writer.write_event(Event::Start(gpx))?;

    for record in route {
        let mut wpt = BytesStart::new("wpt");
        wpt.push_attribute(("lat", record.position.latitude.to_string().as_str()));
        wpt.push_attribute(("lon", record.position.longitude.to_string().as_str()));
        writer.write_event(Event::Start(wpt))?;

        writer.write_event(Event::Start(BytesStart::new("name")))?;
        writer.write_event(Event::Text(BytesText::new(
            record.ssid.as_deref().unwrap_or(&record.id),
        )))?;
        writer.write_event(Event::End(BytesEnd::new("name")))?;

        writer.write_event(Event::End(BytesEnd::new("wpt")))?;
    }

    writer.write_event(Event::Start(BytesStart::new("trk")))?;
    writer.write_event(Event::Start(BytesStart::new("trkseg")))?;
    for point in &snapped.points {
        let mut trkpt = BytesStart::new("trkpt");
        trkpt.push_attribute(("lat", point.latitude.to_string().as_str()));
        trkpt.push_attribute(("lon", point.longitude.to_string().as_str()));
        writer.write_event(Event::Empty(trkpt))?;
    }
    writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
    writer.write_event(Event::End(BytesEnd::new("trk")))?;

    writer.write_event(Event::End(BytesEnd::new("gpx")))?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use wardrive_core::GeoPoint;

    use super::*;

    fn record(ssid: Option<&str>) -> NetworkRecord {
        NetworkRecord {
            id: "AA:BB:CC:00:00:01".to_owned(),
            position: GeoPoint::new(36.17, -115.14),
            signal_dbm: -60,
            is_open: false,
            ssid: ssid.map(str::to_owned),
            raw_metadata: serde_json::Map::new(),
        }
    }

    fn rendered(route: &[NetworkRecord], snapped: &SnappedPath) -> String {
        String::from_utf8(render_track(route, snapped).expect("render should succeed"))
            .expect("gpx output is utf-8")
    }

    #[test]
    fn track_contains_every_snapped_point() {
        let snapped = SnappedPath {
            points: vec![GeoPoint::new(36.17, -115.14), GeoPoint::new(36.18, -115.15)],
            instructions: vec![],
        };
        let gpx = rendered(&[record(Some("lobby-wifi"))], &snapped);

        assert!(gpx.contains(r#"<gpx version="1.1" creator="wardrive""#));
        assert_eq!(gpx.matches("<trkpt").count(), 2);
        assert!(gpx.contains(r#"<trkpt lat="36.18" lon="-115.15"/>"#));
        assert!(gpx.contains("<name>lobby-wifi</name>"));
    }

    #[test]
    fn hidden_networks_are_named_by_bssid() {
        let gpx = rendered(&[record(None)], &SnappedPath::default());
        assert!(gpx.contains("<name>AA:BB:CC:00:00:01</name>"));
    }

    #[test]
    fn ssid_text_is_xml_escaped() {
        let gpx = rendered(&[record(Some("cafe & <bar>"))], &SnappedPath::default());
        assert!(gpx.contains("cafe &amp; &lt;bar&gt;"));
    }
}
