//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated
//! here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use faultdetect_core::{FaultService, FaultServicePort};
use faultdetect_db::{SqliteFaultRepository, SqlitePool, setup_database};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create a config with default CORS (allow all).
    #[must_use]
    pub fn new(port: u16, database_path: impl Into<PathBuf>) -> Self {
        Self {
            port,
            database_path: database_path.into(),
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services for the web server, plus the pool handle
/// so the process can close it once on shutdown.
pub struct AxumContext {
    /// Fault service backing the API handlers.
    pub faults: Arc<dyn FaultServicePort>,
    /// Long-lived database handle, acquired once at bootstrap.
    pub pool: SqlitePool,
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        database_path = %config.database_path.display(),
        port = config.port,
        "Axum bootstrap resolved configuration"
    );

    // 1. Create database pool with schema setup
    let pool = setup_database(&config.database_path).await?;

    // 2. Wire the repository into the fault service
    let repo = Arc::new(SqliteFaultRepository::new(pool.clone()));
    let faults: Arc<dyn FaultServicePort> = Arc::new(FaultService::new(repo));

    Ok(AxumContext { faults, pool })
}

/// Start the web server on the configured port.
///
/// Serves until ctrl-c, then closes the database pool.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let pool = ctx.pool.clone();

    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("fault recording server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Storage client shutdown hook: invoked once at process termination
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
    }
}
