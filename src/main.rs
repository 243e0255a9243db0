//! group-split-gateway server entry point.
//!
//! Loads configuration, prepares the store (running migrations once), and
//! starts the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use group_split_gateway::api;
use group_split_gateway::app_state::AppState;
use group_split_gateway::config::{ServiceConfig, StorageBackend};
use group_split_gateway::persistence::{GroupStore, MemoryStore, PostgresStore};
use group_split_gateway::service::GroupService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServiceConfig::from_env().map_err(|e| anyhow::anyhow!("configuration: {e}"))?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        addr = %config.listen_addr,
        backend = ?config.storage_backend,
        strict_mutations = config.strict_mutations,
        "starting group-split-gateway"
    );

    // Build persistence layer
    let store: Arc<dyn GroupStore> = match config.storage_backend {
        StorageBackend::Postgres => Arc::new(
            PostgresStore::connect(&config)
                .await
                .context("connecting to postgres")?,
        ),
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };
    store.migrate().await.context("running migrations")?;

    // Build service layer
    let group_service =
        GroupService::new(store).with_strict_mutations(config.strict_mutations);
    let app_state = AppState::new(group_service);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    api::serve(listener, app_state).await?;

    Ok(())
}
