use anyhow::Result;
use dashboard_service::{api, config::AppConfig, metrics_server, observability, sources};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr)?;
    }

    // Build the read-only record store once; every request shares it.
    let source = sources::from_config(cfg.seed.as_ref());
    let store = sources::load_store(source.as_ref())?;

    let addr: SocketAddr = cfg
        .server
        .bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server.bind_addr: {e}"))?;

    let app = api::router(api::AppState::new(store, cfg.settings));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dashboard API listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
