//! Integration tests for road snapping using wiremock HTTP mocks.

use std::time::Duration;

use wardrive_core::{AppConfig, GeoPoint, RetryPolicy};
use wardrive_mapbox::MapboxClient;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> AppConfig {
    AppConfig {
        wigle_api_name: "AIDunused".to_owned(),
        wigle_api_token: "unused".to_owned(),
        mapbox_token: "pk.test".to_owned(),
        request_timeout_secs: 5,
        wigle_page_size: 100,
        max_retries: 2,
        retry_delay_ms: 0,
        user_agent: "wardrive-tests/0.1".to_owned(),
        log_level: "info".to_owned(),
    }
}

fn test_client(base_url: &str) -> MapboxClient {
    MapboxClient::with_base_url(&test_config(), base_url)
        .expect("client construction should not fail")
}

fn no_delay_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::ZERO)
}

fn waypoints(count: usize) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            let offset = i as f64;
            GeoPoint::new(36.0 + offset * 1e-3, -115.0 - offset * 1e-3)
        })
        .collect()
}

fn route_body(
    coordinates: &[[f64; 2]],
    steps: &[(&str, &str)],
) -> serde_json::Value {
    let step_values: Vec<serde_json::Value> = steps
        .iter()
        .map(|(kind, instruction)| {
            serde_json::json!({ "maneuver": { "type": kind, "instruction": instruction } })
        })
        .collect();
    serde_json::json!({
        "code": "Ok",
        "routes": [{
            "geometry": { "type": "LineString", "coordinates": coordinates },
            "legs": [{ "steps": step_values }]
        }]
    })
}

#[tokio::test]
async fn snaps_one_window_with_geometry_and_guidance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/directions/v5/mapbox/driving/"))
        .and(query_param("geometries", "geojson"))
        .and(query_param("steps", "true"))
        .and(query_param("access_token", "pk.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(
            &[[-115.0, 36.0], [-115.001, 36.001], [-115.002, 36.002]],
            &[
                ("turn", "Turn left"),
                ("turn", "Turn left"),
                ("continue", "Go straight"),
                ("continue", "Go straight"),
                ("turn", "Turn left"),
                ("arrive", "You have arrived at your destination"),
            ],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let snapped = client
        .snap_route(&waypoints(3), &no_delay_retry(2))
        .await;

    // Geometry comes back in lat/lon order.
    assert_eq!(snapped.points[0], GeoPoint::new(36.0, -115.0));
    assert_eq!(snapped.points.len(), 3);
    // Consecutive duplicates collapse; the non-adjacent repeat survives.
    // The only window is the final one, so its arrival step is kept.
    assert_eq!(
        snapped.instructions,
        vec![
            "Turn left",
            "Go straight",
            "Turn left",
            "You have arrived at your destination"
        ]
    );
}

#[tokio::test]
async fn failed_window_falls_back_to_raw_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/directions/v5/mapbox/driving/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let pts = waypoints(5);
    let snapped = client.snap_route(&pts, &no_delay_retry(2)).await;

    assert_eq!(snapped.points, pts);
    assert!(snapped.instructions.is_empty());
}

#[tokio::test]
async fn unroutable_span_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/directions/v5/mapbox/driving/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": "NoSegment",
            "message": "Could not find a matching segment",
            "routes": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let pts = waypoints(4);
    let snapped = client.snap_route(&pts, &no_delay_retry(3)).await;

    assert_eq!(snapped.points, pts);
    assert!(snapped.instructions.is_empty());
}

#[tokio::test]
async fn intermediate_arrivals_drop_and_boundary_duplicates_collapse() {
    let server = MockServer::start().await;
    // 26 waypoints split into two windows; both get the same response, so
    // the guidance would repeat verbatim without deduplication and an
    // arrival announcement would appear mid-route without filtering.
    Mock::given(method("GET"))
        .and(path_regex("^/directions/v5/mapbox/driving/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(
            &[[-115.0, 36.0], [-115.01, 36.01]],
            &[
                ("continue", "Drive north"),
                ("arrive", "You have arrived at your destination"),
            ],
        )))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let snapped = client
        .snap_route(&waypoints(26), &no_delay_retry(2))
        .await;

    assert_eq!(
        snapped.instructions,
        vec!["Drive north", "You have arrived at your destination"]
    );
    assert_eq!(snapped.points.len(), 4);
}

#[tokio::test]
async fn one_bad_window_does_not_discard_the_rest() {
    let server = MockServer::start().await;
    // Only the first window (starting at waypoint 0) is mocked; the second
    // window's request hits the mock server's 404 default and degrades.
    Mock::given(method("GET"))
        .and(path_regex("^/directions/v5/mapbox/driving/-115,36;"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(
            &[[-115.0, 36.0], [-115.024, 36.024]],
            &[("continue", "Drive north")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let pts = waypoints(26);
    let snapped = client.snap_route(&pts, &no_delay_retry(2)).await;

    // Snapped geometry for the first window, raw input for the second.
    assert_eq!(snapped.points[0], GeoPoint::new(36.0, -115.0));
    assert_eq!(snapped.points.len(), 2 + 2);
    assert_eq!(&snapped.points[2..], &pts[24..26]);
    assert_eq!(snapped.instructions, vec!["Drive north"]);
}

#[tokio::test]
async fn fewer_than_two_waypoints_issue_no_requests() {
    let server = MockServer::start().await;

    let client = test_client(&server.uri());
    let single = waypoints(1);
    let snapped = client.snap_route(&single, &no_delay_retry(2)).await;

    assert_eq!(snapped.points, single);
    assert!(snapped.instructions.is_empty());
    assert!(server
        .received_requests()
        .await
        .is_some_and(|reqs| reqs.is_empty()));
}

#[tokio::test]
async fn trailing_single_waypoint_is_appended_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/directions/v5/mapbox/driving/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_body(
            &[[-115.0, 36.0], [-115.01, 36.01]],
            &[("continue", "Drive north")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let pts = waypoints(25);
    let snapped = client.snap_route(&pts, &no_delay_retry(2)).await;

    // One routed window plus the lone boundary waypoint appended raw.
    assert_eq!(snapped.points.len(), 3);
    assert_eq!(snapped.points[2], pts[24]);
}
