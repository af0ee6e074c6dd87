//! List command handler
//!
//! Seeds the collection, applies a filter and prints the visible points.

use crate::cli::{init_logging, load_points};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use clap::Args;

/// List command arguments
#[derive(Args)]
pub struct ListArgs {
    /// Only show points whose name contains this text
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,

    /// Seed from a place search instead of the configured source
    #[arg(long)]
    pub places: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the list command
pub async fn run(args: ListArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    init_logging("warn");

    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", args.format)))?;

    let config = Config::load()?;
    let mut points = load_points(&config, args.places.as_deref()).await?;

    if let Some(query) = &args.query {
        let visible = points.filter(query);
        eprintln!("{} of {} points match '{}'", visible, points.len(), query);
    }

    let visible: Vec<_> = points.visible().collect();
    let output = formatter.format(&visible, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:<6} - {}", format.name, format.description);
    }
}
