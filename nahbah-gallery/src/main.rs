//! nahbah-gallery - design library web UI
//!
//! Serves the gallery page and JSON API on localhost. Visitors filter
//! approved designs by material, collect designs into a booklet and
//! download the compiled PDF generated by the backend.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nahbah_common::config::{config_file_path, CliOverrides, GalleryConfig, TomlConfig};
use nahbah_gallery::{
    build_identification, build_router, AppState, BackendClient, GallerySession,
};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for nahbah-gallery
///
/// Unset values fall back to NAHBAH_* environment variables, then the TOML
/// config file, then compiled defaults.
#[derive(Parser, Debug)]
#[command(name = "nahbah-gallery")]
#[command(about = "Not A House But A Home design library")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Backend base URL (e.g. http://localhost:8000/api)
    #[arg(long)]
    api_url: Option<String>,

    /// Default UI language (en, hu)
    #[arg(short, long)]
    locale: Option<String>,

    /// Backend request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Path to config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nahbah_gallery=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before any network delay
    info!("Starting {}", build_identification("nahbah-gallery"));

    let args = Args::parse();

    let toml = TomlConfig::load_or_default(config_file_path(args.config.as_deref()).as_deref());
    let cli = CliOverrides {
        api_url: args.api_url,
        locale: args.locale,
        port: args.port,
        request_timeout_secs: args.timeout_secs,
        booklet_dir: None,
    };
    let config = GalleryConfig::resolve(&cli, &toml).context("Invalid configuration")?;

    info!("Backend: {}", config.api_url);
    info!("Default locale: {}", config.locale);

    let client = BackendClient::new(&config.api_url, config.request_timeout)
        .context("Failed to create backend client")?;

    let state = AppState::new(client, GallerySession::new(), config.locale);

    // Catalog failures are logged and shown in the UI; startup continues
    state.reload_catalogs().await;

    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("nahbah-gallery listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
