//! poke-map CLI entry point
//!
//! Searchable Pokemon location map - CLI + web app

use poke_map::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
