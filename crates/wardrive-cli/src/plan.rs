//! The planning pipeline: fetch → order → snap → render.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use wardrive_core::{
    bounding_box, load_app_config, total_distance_miles, GeoPoint, NetworkTypeFilter, RetryPolicy,
};
use wardrive_mapbox::MapboxClient;
use wardrive_wigle::WigleClient;

use crate::progress::Spinner;
use crate::render;
use crate::start;

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Starting location: "lat,lon" or a street address.
    #[arg(long)]
    pub start: String,

    /// Search radius in kilometers.
    #[arg(long, default_value_t = 2.0)]
    pub radius_km: f64,

    /// Which networks to target.
    #[arg(long, value_enum, default_value = "both")]
    pub networks: NetworkKind,

    /// Stop collecting once this many records are gathered.
    #[arg(long, default_value_t = 500)]
    pub target_count: usize,

    /// Drop records weaker than this signal (dBm).
    #[arg(long, default_value_t = -100, allow_hyphen_values = true)]
    pub min_signal: i32,

    /// Directory for the map and track files.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NetworkKind {
    Open,
    Secure,
    Both,
}

impl From<NetworkKind> for NetworkTypeFilter {
    fn from(kind: NetworkKind) -> Self {
        match kind {
            NetworkKind::Open => NetworkTypeFilter::Open,
            NetworkKind::Secure => NetworkTypeFilter::Secure,
            NetworkKind::Both => NetworkTypeFilter::All,
        }
    }
}

/// Runs one planning attempt end to end.
///
/// Stages run strictly in sequence; each hands the next an owned,
/// immutable value. An empty fetch result is a normal outcome reported to
/// the user, not an error.
pub async fn run(args: &PlanArgs) -> anyhow::Result<()> {
    let config = load_app_config().context("loading configuration")?;
    let retry = RetryPolicy::new(
        config.max_retries,
        Duration::from_millis(config.retry_delay_ms),
    );

    let wigle = WigleClient::new(&config).context("building WiGLE client")?;
    let mapbox = MapboxClient::new(&config).context("building Mapbox client")?;

    let start_point = start::resolve(&mapbox, &args.start).await?;
    let area = bounding_box(start_point, args.radius_km * 1000.0);
    tracing::debug!(?area, radius_km = args.radius_km, "search area projected");

    let records = {
        let spinner = Spinner::start("Fetching network observations");
        let result = wigle
            .search_area(
                area,
                args.networks.into(),
                args.target_count,
                args.min_signal,
                &retry,
            )
            .await;
        spinner.finish();
        result.context("searching for networks")?
    };

    if records.is_empty() {
        println!("No networks found — try a larger radius or a lower signal cutoff.");
        return Ok(());
    }
    println!("Found {} networks.", records.len());

    let route = wardrive_core::route::optimize(start_point, records);

    let waypoints: Vec<GeoPoint> = std::iter::once(start_point)
        .chain(route.iter().map(|r| r.position))
        .collect();

    let snapped = {
        let spinner = Spinner::start("Snapping route to roads");
        let snapped = mapbox.snap_route(&waypoints, &retry).await;
        spinner.finish();
        snapped
    };

    let miles = total_distance_miles(&snapped.points);

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output directory {}", args.output_dir.display()))?;
    let stamp = chrono::Utc::now().timestamp();

    let map_path = args.output_dir.join(format!("wardrive_route_{stamp}.html"));
    std::fs::write(
        &map_path,
        render::map::render_map(start_point, &route, &snapped),
    )
    .with_context(|| format!("writing map to {}", map_path.display()))?;

    let gpx_path = args.output_dir.join(format!("wardrive_route_{stamp}.gpx"));
    std::fs::write(&gpx_path, render::gpx::render_track(&route, &snapped)?)
        .with_context(|| format!("writing track to {}", gpx_path.display()))?;

    if let (Some(first), Some(last)) = (route.first(), route.last()) {
        println!("First stop: {}", describe_stop(&mapbox, first.position).await);
        println!("Last stop:  {}", describe_stop(&mapbox, last.position).await);
    }
    println!("Total route distance: {miles:.2} miles");
    println!("Map written to {}", map_path.display());
    println!("Track written to {}", gpx_path.display());

    Ok(())
}

/// Labels a stop with its street address, degrading to a placeholder when
/// the geocoder fails or knows nothing there.
async fn describe_stop(mapbox: &MapboxClient, point: GeoPoint) -> String {
    match mapbox.reverse_geocode(point).await {
        Ok(Some(name)) => name,
        Ok(None) => "address unknown".to_owned(),
        Err(err) => {
            tracing::debug!(error = %err, "reverse geocode failed");
            "address unknown".to_owned()
        }
    }
}
