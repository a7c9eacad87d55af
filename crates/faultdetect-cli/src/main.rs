//! CLI entry point - the composition root.
//!
//! Loads `.env`, initializes tracing, and dispatches to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use faultdetect_cli::{Cli, Commands, Config, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve { port } => handlers::serve::execute(config, port).await,
        Commands::QueryFaults => handlers::query_faults::execute(config).await,
    }
}
