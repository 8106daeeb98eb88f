//! Lecturer Claims - API Server Binary
//!
//! This binary starts the HTTP API server for lecturer claim submission and
//! approval.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-api
//!
//! # Run with environment variables
//! API_PORT=9000 API_SEED_SAMPLE_DATA=true cargo run --bin claims-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_COORDINATOR_NAME` - Name recorded on coordinator approvals (default: Coordinator User)
//! * `API_LECTURER_ID` / `API_LECTURER_NAME` - Lecturer used when a submission names none
//! * `API_DEFAULT_HOURLY_RATE` - Rate used when a submission gives none (default: 150)
//! * `API_MAX_DOCUMENT_BYTES` - Per-file upload limit (default: 10485760)
//! * `API_SEED_SAMPLE_DATA` - Load the demonstration claims at startup (default: false)

use anyhow::Context;
use chrono::Utc;
use domain_claims::{seed::load_sample_data, ApprovalWorkflow};
use interface_api::{create_router, config::ApiConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fails when the configuration is invalid, sample data cannot be loaded or
/// the address cannot be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        coordinator = %config.coordinator_name,
        "Starting Lecturer Claims API Server"
    );

    let workflow = build_workflow(&config)?;

    let app = create_router(workflow, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Loads API configuration from `API_`-prefixed environment variables.
///
/// Unset variables keep their defaults; a variable that is set but cannot
/// be parsed is an error.
fn load_config() -> anyhow::Result<ApiConfig> {
    ApiConfig::from_env().context("failed to load API configuration")
}

/// `RUST_LOG` wins over the configured level when set
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Creates the workflow, seeding the sample claims when configured to.
fn build_workflow(config: &ApiConfig) -> anyhow::Result<ApprovalWorkflow> {
    let mut workflow = ApprovalWorkflow::new(config.workflow_config());
    if config.seed_sample_data {
        let ids = load_sample_data(&mut workflow, Utc::now()).context("failed to load sample claims")?;
        tracing::info!(claims = ids.len(), "Sample data loaded");
    }
    Ok(workflow)
}

/// Resolves on Ctrl+C, or on SIGTERM under unix, so `axum::serve` can
/// drain in-flight requests.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable, waiting for Ctrl+C only");
                wait_for_ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = wait_for_ctrl_c() => {}
            _ = terminate.recv() => tracing::info!("SIGTERM received, shutting down"),
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Ctrl+C received, shutting down"),
        Err(err) => {
            // Without a handler the server runs until killed
            tracing::warn!(error = %err, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    }
}
