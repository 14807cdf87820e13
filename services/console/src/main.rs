//! Owl console access service entry point.
//!
//! Loads configuration and the access snapshot, then serves the console API
//! until ctrl-c.
use anyhow::Context;
use console::app::{AppState, build_router};
use console::config::ConsoleConfig;
use console::observability;
use console::store::memory::InMemoryStore;
use console::store::{ConsoleSnapshot, ConsoleStore};
use owl_authz::FilterOptions;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env_or_yaml().context("console config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: ConsoleConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics = observability::init_observability("owl-console");
    let state = build_state(&config, metrics)?;
    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "owl console listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

fn build_state(
    config: &ConsoleConfig,
    metrics: metrics_exporter_prometheus::PrometheusHandle,
) -> anyhow::Result<AppState> {
    let store = match &config.snapshot_path {
        Some(path) => InMemoryStore::from_path(path)
            .with_context(|| format!("load snapshot {}", path.display()))?,
        None => {
            tracing::warn!("no snapshot configured; serving empty access tables");
            InMemoryStore::new(ConsoleSnapshot::default())
        }
    };
    tracing::info!(backend = store.backend_name(), "snapshot store ready");
    Ok(AppState {
        store: Arc::new(store),
        filter_options: FilterOptions {
            unknown: config.unknown_filter,
        },
        user_header: config.user_header.clone(),
        metrics,
    })
}
