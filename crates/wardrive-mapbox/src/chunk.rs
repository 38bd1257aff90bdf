//! Waypoint chunking for the Directions API's per-request limit.
//!
//! Long waypoint lists are split into overlapping windows: window size
//! `window`, stride `window - 1`, so each chunk begins on the last waypoint
//! of the one before it and the snapped chunks join at a shared coordinate.

use wardrive_core::GeoPoint;

/// Most waypoints the Directions API accepts in one request.
pub(crate) const MAX_WAYPOINTS_PER_REQUEST: usize = 25;

/// One planned unit of snapping work.
///
/// A trailing remainder of fewer than two points cannot be routed on its
/// own, so instead of becoming a request it is carried as
/// `MergeIntoPrevious` and appended raw to the assembled path after the
/// chunk before it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingChunk {
    /// Route these waypoints through the directions service.
    Submit(Vec<GeoPoint>),
    /// Append these raw coordinates after the previous chunk's output.
    MergeIntoPrevious(Vec<GeoPoint>),
}

/// Splits `waypoints` into overlapping request windows.
///
/// Callers guarantee at least two waypoints; shorter inputs never reach
/// the chunking stage.
pub(crate) fn plan_chunks(waypoints: &[GeoPoint], window: usize) -> Vec<PendingChunk> {
    let stride = window - 1;
    let mut chunks = Vec::new();
    let mut start = 0_usize;

    while start < waypoints.len() {
        let end = (start + window).min(waypoints.len());
        let slice = waypoints[start..end].to_vec();
        if slice.len() < 2 && !chunks.is_empty() {
            chunks.push(PendingChunk::MergeIntoPrevious(slice));
        } else {
            chunks.push(PendingChunk::Submit(slice));
        }
        start += stride;
    }

    chunks
}
