use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use portal_config::PortalConfig;
use portal_db::service::PortalService;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("portal error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = PortalConfig::load_with_dotenv().context("failed to load configuration")?;

    cli.command
        .apply(&mut config)
        .context("invalid command-line override")?;

    match cli.command {
        cli::Commands::Serve(_) => serve(config).await,
        cli::Commands::InitDb(_) => {
            PortalService::new_local(&config.database.path)
                .await
                .with_context(|| format!("failed to initialize {}", config.database.path))?;
            tracing::info!(path = %config.database.path, "database schema ready");
            Ok(())
        }
    }
}

async fn serve(config: PortalConfig) -> anyhow::Result<()> {
    let svc = PortalService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database {}", config.database.path))?;
    let state = portal_api::AppState::new(Arc::new(svc), config.pagination.clone());
    let app = portal_api::build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, database = %config.database.path, "language portal listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("language portal shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PORTAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
