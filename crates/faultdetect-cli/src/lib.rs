//! CLI definition for the fault recording service.
//!
//! The binary has two entry points collapsed into subcommands: `serve`
//! runs the HTTP API, `query-faults` dumps the stored records.

pub mod config;
pub mod handlers;

use clap::{Parser, Subcommand};

pub use config::Config;

/// Fault recording service CLI.
#[derive(Parser)]
#[command(name = "faultdetect", version, about = "Record and retrieve product fault detections")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the fault recording API server.
    Serve {
        /// Port to listen on (overrides the PORT environment variable).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print every fault record in the store.
    QueryFaults,
}
