//! Environment-backed configuration.
//!
//! The configuration provider supplies two values at process start: the
//! database path and the listen port. Missing values are fatal to startup,
//! never a runtime concern.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Port for the HTTP server.
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `.env` loading (dotenvy) happens in `main` before this is called.
    pub fn from_env() -> Result<Self> {
        let database_path = std::env::var("DATABASE_PATH")
            .context("DATABASE_PATH is not set")?
            .into();

        let port = std::env::var("PORT")
            .context("PORT is not set")?
            .parse::<u16>()
            .context("PORT is not a valid port number")?;

        Ok(Self {
            database_path,
            port,
        })
    }
}
