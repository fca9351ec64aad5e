//! QR Forge Server - Binary Entry Point

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use qr_forge::{create_app, AppState, Config, HistoryStore, PngRenderer};

/// QR code generation server.
#[derive(Parser, Debug)]
#[command(name = "qr-server")]
#[command(about = "HTTP server for generating QR codes", long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT).
    #[arg(long)]
    port: Option<u16>,

    /// History snapshot file (overrides QR_HISTORY_FILE).
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Directory for generated images (overrides QR_IMAGES_DIR).
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Static site directory (overrides QR_PUBLIC_DIR).
    #[arg(long)]
    public_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(path) = args.history_file {
        config.history_file = path;
    }
    if let Some(dir) = args.images_dir {
        config.images_dir = dir;
    }
    if let Some(dir) = args.public_dir {
        config.public_dir = dir;
    }

    fs::create_dir_all(&config.images_dir)?;

    let history = Arc::new(HistoryStore::open(&config.history_file, config.max_history));
    let renderer = Arc::new(PngRenderer::new(&config.images_dir));
    let state = Arc::new(AppState::new(history, renderer));

    let app = create_app(state, &config.images_dir, &config.public_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        history_file = %config.history_file.display(),
        images_dir = %config.images_dir.display(),
        max_history = config.max_history,
        "QR generator server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
