//! Wulkan Kibo preview server: serves the static site directory with the
//! same layout a static host would, for local development of the WASM
//! runtime and the i18n dictionaries.

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    if !config.site_dir.is_dir() {
        tracing::warn!(site_dir = %config.site_dir.display(), "site directory missing; every page will 404");
    }

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, site_dir = %config.site_dir.display(), "wulkan-kibo listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
