//! Show command handler
//!
//! Selects a single point, fetching its PokeAPI detail, and prints it.

use crate::cli::{init_logging, load_points};
use crate::config::Config;
use crate::detail::{DetailPipeline, HttpJsonSource};
use crate::error::{Error, Result};
use crate::format::text::format_detail;
use crate::point::{PointCollection, PointView};
use clap::Args;

/// Show command arguments
#[derive(Args)]
pub struct ShowArgs {
    /// Point name or number (e.g. "Pikachu" or "25")
    pub point: String,

    /// Output format: text or json
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Seed from a place search instead of the configured source
    #[arg(long)]
    pub places: Option<String>,
}

/// Run the show command
pub async fn run(args: ShowArgs) -> Result<()> {
    init_logging("warn");

    let config = Config::load()?;
    let mut points = load_points(&config, args.places.as_deref()).await?;

    let number = resolve_number(&points, &args.point)?;
    let pipeline = DetailPipeline::new(HttpJsonSource::new()?, config.api.pokeapi_url.clone());

    let point = points.select(number, &pipeline).await?;

    let output = match args.format.to_lowercase().as_str() {
        "text" => format_detail(point, &config),
        "json" => serde_json::to_string_pretty(&PointView::from(point))?,
        other => return Err(Error::Config(format!("Unknown format: {}", other))),
    };
    println!("{}", output);

    if pipeline.errors().is_raised() {
        eprintln!("Some detail could not be loaded from {}", pipeline.base_url());
    }

    Ok(())
}

/// Accept either a 1-based number or a point name
fn resolve_number(points: &PointCollection, key: &str) -> Result<usize> {
    let found = match key.parse::<usize>() {
        Ok(number) => points.get(number),
        Err(_) => points.find_by_name(key),
    };

    found
        .map(|p| p.number())
        .ok_or_else(|| Error::PointNotFound(key.to_string()))
}
