//! Road snapping over the Mapbox Directions API.

use reqwest::Url;
use wardrive_core::{GeoPoint, RetryPolicy, SnappedPath};

use crate::chunk::{plan_chunks, PendingChunk, MAX_WAYPOINTS_PER_REQUEST};
use crate::client::MapboxClient;
use crate::error::{is_transient, MapboxError};
use crate::types::DirectionsResponse;

/// One turn-by-turn step extracted from a chunk response.
struct GuidanceStep {
    instruction: String,
    is_arrival: bool,
}

impl MapboxClient {
    /// Snaps an ordered waypoint list to drivable roads.
    ///
    /// Waypoints are routed in overlapping windows of up to 25 and the
    /// window results stitched back together in order. A window whose
    /// request still fails after `retry` is spent contributes its raw
    /// input coordinates and no guidance — one unreachable span never
    /// discards the rest of the path. A trailing remainder too short to
    /// route is appended raw rather than requested.
    ///
    /// Guidance is concatenated across windows; destination announcements
    /// from every window but the last are dropped, then consecutive
    /// textually-identical instructions collapse to one (window boundaries
    /// routinely repeat the "continue" step they share).
    ///
    /// Lists with fewer than two waypoints are returned as-is with no
    /// guidance: there is nothing to route.
    pub async fn snap_route(&self, waypoints: &[GeoPoint], retry: &RetryPolicy) -> SnappedPath {
        if waypoints.len() < 2 {
            return SnappedPath {
                points: waypoints.to_vec(),
                instructions: Vec::new(),
            };
        }

        let chunks = plan_chunks(waypoints, MAX_WAYPOINTS_PER_REQUEST);
        let submit_total = chunks
            .iter()
            .filter(|c| matches!(c, PendingChunk::Submit(_)))
            .count();

        let mut points: Vec<GeoPoint> = Vec::new();
        let mut instructions: Vec<String> = Vec::new();
        let mut submitted = 0_usize;

        for chunk in chunks {
            match chunk {
                PendingChunk::Submit(coords) => {
                    submitted += 1;
                    let is_final = submitted == submit_total;
                    let routed = retry.run(is_transient, || self.route_chunk(&coords)).await;
                    match routed {
                        Ok((geometry, steps)) => {
                            points.extend(geometry);
                            instructions.extend(steps.into_iter().filter_map(|step| {
                                if step.instruction.is_empty()
                                    || (step.is_arrival && !is_final)
                                {
                                    None
                                } else {
                                    Some(step.instruction)
                                }
                            }));
                        }
                        Err(err) => {
                            tracing::warn!(
                                error = %err,
                                chunk_len = coords.len(),
                                "directions request failed — keeping raw coordinates for this span"
                            );
                            points.extend(coords);
                        }
                    }
                }
                PendingChunk::MergeIntoPrevious(coords) => points.extend(coords),
            }
        }

        instructions.dedup();
        SnappedPath {
            points,
            instructions,
        }
    }

    /// Routes one window of waypoints, returning the snapped geometry and
    /// the guidance steps of every leg.
    async fn route_chunk(
        &self,
        coords: &[GeoPoint],
    ) -> Result<(Vec<GeoPoint>, Vec<GuidanceStep>), MapboxError> {
        let url = self.directions_url(coords)?;
        let response: DirectionsResponse = self
            .get_json(url, &format!("directions for {} waypoints", coords.len()))
            .await?;

        if response.code != "Ok" {
            return Err(MapboxError::NoRoute {
                code: response
                    .message
                    .map_or(response.code.clone(), |m| format!("{}: {m}", response.code)),
            });
        }
        let Some(route) = response.routes.into_iter().next() else {
            return Err(MapboxError::NoRoute {
                code: "empty route list".to_owned(),
            });
        };

        let geometry = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lon, lat]| GeoPoint::new(lat, lon))
            .collect();
        let steps = route
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(|step| GuidanceStep {
                is_arrival: step.maneuver.kind == "arrive",
                instruction: step.maneuver.instruction,
            })
            .collect();

        Ok((geometry, steps))
    }

    fn directions_url(&self, coords: &[GeoPoint]) -> Result<Url, MapboxError> {
        let pairs: Vec<String> = coords
            .iter()
            .map(|p| format!("{},{}", p.longitude, p.latitude))
            .collect();
        let mut url = self
            .base_url
            .join(&format!("directions/v5/mapbox/driving/{}", pairs.join(";")))
            .map_err(|e| MapboxError::Api(format!("invalid directions URL: {e}")))?;

        url.query_pairs_mut()
            .append_pair("geometries", "geojson")
            .append_pair("overview", "full")
            .append_pair("steps", "true")
            .append_pair("access_token", &self.token);

        Ok(url)
    }
}
