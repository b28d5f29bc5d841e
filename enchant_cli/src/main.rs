//! enchant - tabletop enchanting calculator

use anyhow::Result;
use clap::Parser;
use enchant_cli::{render, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays the report
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        enchant_type = %cli.enchant_type,
        time_factor = %cli.time_factor,
        "calculating enchantment"
    );

    let outcome = match cli.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("{e:#}");
            return Err(e);
        }
    };
    println!("{}", render(&cli, &outcome)?);

    Ok(())
}
