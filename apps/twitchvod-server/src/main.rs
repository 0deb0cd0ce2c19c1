use std::sync::Arc;

use config::Config;
use eyre::{Context as _, Result};
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use twitchvod_gql::VideoResolver;

mod auth;
mod config;
mod error;
mod router;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let resolver = VideoResolver::new(&config.client_id, config.endpoint)
        .wrap_err("Failed to set up Twitch client")?;

    let app = router::build_router(Arc::new(AppState {
        resolver,
        secret: config.secret,
    }));

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .wrap_err_with(|| format!("Failed to bind to port {}", config.port))?;

    tracing::info!(name = "ServerStart", address = %listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server exited unexpectedly")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }

    tracing::info!(name = "ServerStop");
}
