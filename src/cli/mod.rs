//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod list;
pub mod serve;
pub mod show;

use crate::config::Config;
use crate::error::Result;
use crate::geo::get_geocoder;
use crate::point::PointCollection;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Searchable map of Pokemon locations
#[derive(Parser)]
#[command(name = "poke-map")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List points, optionally filtered
    List(list::ListArgs),

    /// Select one point and show its detail
    Show(show::ShowArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => list::run(args).await,
        Commands::Show(args) => show::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Initialize logging, honoring RUST_LOG when set
fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Seed a collection from the configured source
///
/// `places` overrides the configured source with a place search.
async fn load_points(config: &Config, places: Option<&str>) -> Result<PointCollection> {
    let source = config.seed_source(places)?;
    let geocoder = get_geocoder(&config.api.nominatim_url)?;

    let rows = source.load(&geocoder).await?;
    Ok(PointCollection::seed(rows))
}
