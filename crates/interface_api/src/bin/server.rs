//! iWallet - API Server Binary
//!
//! This binary starts the HTTP API server over a JSON wallet document.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin iwallet-api
//!
//! # Run with environment variables
//! IWALLET_PORT=9090 IWALLET_DATA_PATH=/var/lib/iwallet/wallet.json cargo run --bin iwallet-api
//! ```
//!
//! # Environment Variables
//!
//! * `IWALLET_HOST` - Server host (default: 0.0.0.0)
//! * `IWALLET_PORT` - Server port (default: 8080)
//! * `IWALLET_DATA_PATH` - Wallet document location (default: iwallet.json)
//! * `IWALLET_TIMEZONE` - IANA zone for "today" (default: America/Mexico_City)
//! * `IWALLET_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `IWALLET_LOG_JSON` - Emit JSON log lines (default: false)
//!
//! `RUST_LOG`, when set, takes precedence over `IWALLET_LOG_LEVEL`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::SystemClock;
use infra_store::{DocumentStore, JsonFileStore};
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, checks the document can be
/// read, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid IWALLET_* configuration")?;

    init_tracing(&config.log_level, config.log_json);

    let timezone = config.timezone().context("invalid IWALLET_TIMEZONE")?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_path = %config.data_path.display(),
        timezone = %config.timezone,
        "Starting iWallet API Server"
    );

    let store = JsonFileStore::new(&config.data_path);
    // Fail fast on an unreadable or corrupt document
    let doc = store
        .load()
        .await
        .with_context(|| format!("cannot load {}", config.data_path.display()))?;
    tracing::info!(
        planned_expenses = doc.planned_expenses.len(),
        categories = doc.categories.len(),
        currency = %doc.settings.currency,
        "Document ready"
    );

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    let state = AppState::new(Arc::new(store), Arc::new(SystemClock::new(timezone)), config);
    let app = create_router(state);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
