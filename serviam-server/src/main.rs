//! # Serviam Server
//!
//! Personal media catalog server.
//!
//! ## Overview
//!
//! On startup the server loads every film, collection and show record under
//! the media root into memory, then serves:
//!
//! - **Browsing**: reproducible shuffles of the catalog keyed by a hex seed
//! - **Search**: case-insensitive substring matches over titles and names
//! - **Pagination**: card slices of any ordering for infinite scrolling
//! - **Details**: info and watch card sets for a single item
//!
//! The catalog is read once; restart the server to pick up new records.

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use serviam_core::catalog::{CatalogIndex, CatalogLoader};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use serviam_server::{
    AppState, create_app,
    infra::config::{Config, ConfigLoad, ConfigLoader},
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "serviam-server")]
#[command(about = "Browse, search and stream a local film and TV catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Configuration file (overrides SERVIAM_CONFIG_PATH and discovery)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Directory holding films/, collections/ and shows/ (overrides config)
    #[arg(long)]
    media_root: Option<PathBuf>,

    /// Static assets directory (overrides config)
    #[arg(long)]
    files_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the catalog, report what was indexed and exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_runtime_config(&cli.serve)?;
    let catalog = load_catalog(&config).await?;

    if let Some(Command::Check) = cli.command {
        info!("catalog check passed");
        return Ok(());
    }

    run_server(config, catalog).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(root) = args.media_root.clone() {
        config.media.root = root;
    }
    if let Some(files_dir) = args.files_dir.clone() {
        config.media.files_dir = files_dir;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    Ok(config)
}

async fn load_catalog(config: &Config) -> anyhow::Result<CatalogIndex> {
    let root = config.media.root.clone();
    info!(root = %root.display(), "loading catalog");

    let loader = CatalogLoader::new(root.clone());
    tokio::task::spawn_blocking(move || CatalogIndex::build(&loader))
        .await
        .context("catalog loader task failed")?
        .with_context(|| {
            format!("failed to load catalog from {}", root.display())
        })
}

async fn run_server(
    config: Config,
    catalog: CatalogIndex,
) -> anyhow::Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let app = create_app(AppState::new(config, catalog));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!("Starting Serviam server (HTTP) on {}:{}", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
