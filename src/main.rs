mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info,tower_http=info")))
        .init();

    run().await.inspect_err(|e| tracing::error!(error = %e, "folio failed"))
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr()?;
    tracing::debug!(site_url = %config.site_url, "configuration loaded");
    let state = state::AppState::new(config);

    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "folio listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("folio stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
