use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod plan;
mod progress;
mod render;
mod start;

#[derive(Debug, Parser)]
#[command(name = "wardrive")]
#[command(about = "Plan wireless-survey driving routes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Plan a survey route around a starting location.
    Plan(plan::PlanArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Plan(args) => plan::run(&args).await,
    }
}
