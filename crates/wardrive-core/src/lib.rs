//! Domain types and pure planning logic shared by the wardrive crates.
//!
//! Everything here is network-free: geographic projection, the route
//! ordering heuristic, the retry policy the HTTP client crates inject, and
//! environment-based configuration.

use thiserror::Error;

mod app_config;
mod config;
pub mod geo;
pub mod retry;
pub mod route;
mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{bounding_box, planar_distance, total_distance_miles, BoundingBox, GeoPoint};
pub use retry::RetryPolicy;
pub use types::{NetworkRecord, NetworkTypeFilter, SnappedPath};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
