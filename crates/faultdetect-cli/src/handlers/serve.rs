//! Serve command handler.
//!
//! Starts the HTTP API server.

use anyhow::Result;

use crate::config::Config;
use faultdetect_axum::{ServerConfig, start_server};

/// Execute the serve command.
///
/// # Arguments
///
/// * `config` - Process configuration loaded from the environment
/// * `port` - Optional port override from the command line
pub async fn execute(config: Config, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.port);

    start_server(ServerConfig::new(port, config.database_path)).await
}
