use std::future::Future;

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

/// Build the application for a given configuration.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::in_memory(cfg.store.seed_fixtures);
    routes::build_router(state, cfg.server.max_body_bytes)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Bind and serve until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg);
    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(
        %addr,
        seed_fixtures = cfg.store.seed_fixtures,
        max_body_bytes = cfg.server.max_body_bytes,
        "bookstore listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: serve with the given config until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    serve(cfg, shutdown_signal()).await
}
