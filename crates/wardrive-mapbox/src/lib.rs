//! Client for the Mapbox Directions and Geocoding APIs.
//!
//! [`MapboxClient::snap_route`] turns an ordered waypoint list into a
//! continuous road-aligned path, splitting the list into overlapping
//! windows to respect the per-request waypoint limit and degrading any
//! failed window to its raw coordinates. The geocoding half resolves
//! human-entered start locations and labels route stops.

mod chunk;
mod client;
mod directions;
mod error;
mod geocoding;
mod types;

pub use client::MapboxClient;
pub use error::MapboxError;
