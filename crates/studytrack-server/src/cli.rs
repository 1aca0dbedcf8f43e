//! CLI module for studytrack-server.
//!
//! This module provides the command-line interface used by the standalone
//! binary: config loading with CLI overrides, tracing setup, optional
//! metrics exporter, backend selection, and serving with graceful shutdown.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use studytrack_auth::{CredentialAuth, MemoryUsers, UserStore, sql::SqlUsers};
use studytrack_config::{
    CliOverrides, Config, LoggingConfig, apply_overrides, load_config, validate_config,
};
use studytrack_core::db::SqlStoreConfig;
use studytrack_resources::ResourceClient;
use studytrack_store::{MarkStore, MemoryMarks, sql::SqlMarks};

use crate::routes::router;
use crate::state::AppState;

/// Studytrack server CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "studytrack-server", version, about = "Student performance tracker server")]
pub struct ServerArgs {
    /// Config file path (json/yaml/toml)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Run the studytrack server with the given arguments.
pub async fn run(args: ServerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(&args.config)?;
    apply_overrides(&mut config, &args.overrides);
    validate_config(&config)?;

    init_tracing(&config.logging);

    if let Some(listen) = &config.metrics.listen {
        match studytrack_metrics::init_prometheus(listen) {
            Ok(()) => info!("metrics exporter listening on {listen}"),
            Err(e) => warn!("failed to start metrics exporter: {e}"),
        }
    }

    let state = build_state(config).await?;

    let listen = state.config.server.listen.clone();
    let listener = TcpListener::bind(&listen).await?;
    info!("server listening on {listen}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

/// Build shared state from validated config.
///
/// The literal database URL `"memory"` selects the in-memory stores; any
/// other URL goes through SQLx with one pool shared by both stores.
async fn build_state(config: Config) -> Result<AppState, Box<dyn std::error::Error>> {
    let (users, marks): (Arc<dyn UserStore>, Arc<dyn MarkStore>) = if config.database.url == "memory"
    {
        info!("using in-memory stores");
        (Arc::new(MemoryUsers::new()), Arc::new(MemoryMarks::new()))
    } else {
        let sql_config = SqlStoreConfig::new(&config.database.url)
            .max_connections(config.database.max_connections)
            .connect_timeout(Duration::from_secs(config.database.connect_timeout_secs));

        let users = SqlUsers::connect(sql_config).await?;
        users.ensure_schema().await?;

        let marks = SqlMarks::from_pool(users.pool().clone(), users.database_type());
        marks.ensure_schema().await?;

        info!(db = ?users.database_type(), "connected to database");
        (Arc::new(users), Arc::new(marks))
    };

    let resources = ResourceClient::new(
        config.resources.endpoint.clone(),
        config.resources.api_key.clone(),
        config.resources.max_results,
    );

    Ok(AppState {
        auth: Arc::new(CredentialAuth::new(users)),
        marks,
        resources: Arc::new(resources),
        config: Arc::new(config),
    })
}

/// Wait for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            // Fall back to waiting forever
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {}", e);
                // Fall back to waiting forever
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}

/// Initialize tracing subscriber with the given logging configuration.
///
/// Supports:
/// - `level`: Base log level (trace, debug, info, warn, error)
/// - `format`: Output format (json, pretty, compact). Default: pretty
/// - `output`: Output target (stdout, stderr). Default: stderr
/// - `filters`: Per-module log level overrides
fn init_tracing(config: &LoggingConfig) {
    // Build the env filter from base level and per-module filters
    let base_level = config.level.as_deref().unwrap_or("info");
    let mut filter_str = base_level.to_string();

    for (module, level) in &config.filters {
        filter_str.push(',');
        filter_str.push_str(module);
        filter_str.push('=');
        filter_str.push_str(level);
    }

    let filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new("info"));

    let format = config.format.as_deref().unwrap_or("pretty");
    let output = config.output.as_deref().unwrap_or("stderr");

    // Create the subscriber based on format and output
    match (format, output) {
        ("json", "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stdout))
                .init();
        }
        ("json", _) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        ("compact", "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stdout))
                .init();
        }
        ("compact", _) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
        (_, "stdout") => {
            // pretty is default
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stdout))
                .init();
        }
        _ => {
            // pretty to stderr is default
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}
