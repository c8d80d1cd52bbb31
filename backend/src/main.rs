mod config;
mod handlers;
mod models;
mod request_context;
mod routes;
mod state;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Starting blog backend server");
    match &config.content_dir {
        Some(dir) => tracing::info!("Content directory: {}", dir.display()),
        None => tracing::info!("Content directory not set, serving bundled articles"),
    }

    let addr = config.listen_addr();
    let app_state = state::AppState::new(config).await?;
    tracing::info!("Loaded {} articles", app_state.article_count());

    let app = routes::create_router(app_state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
