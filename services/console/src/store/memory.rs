//! In-memory snapshot store.
//!
//! # Purpose
//! Keeps the current [`ConsoleSnapshot`] behind a `tokio::sync::RwLock`. It is
//! the only backend: snapshots are loaded from a YAML or JSON file at startup
//! or pushed in by tests.
//!
//! # Durability and consistency
//! - **Not durable**: state is rebuilt from the snapshot file on restart.
//! - Readers clone the `Arc` under a read lock and then evaluate without
//!   holding it, so a concurrent `replace` never blocks an in-flight request.
//!
//! # Metrics
//! `replace` updates gauges for the size of each table.
use super::{ConsoleSnapshot, ConsoleStore, StoreError, StoreResult};
use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    current: RwLock<Arc<ConsoleSnapshot>>,
}

impl InMemoryStore {
    pub fn new(snapshot: ConsoleSnapshot) -> Self {
        record_sizes(&snapshot);
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    pub fn from_path(path: &Path) -> StoreResult<Self> {
        Ok(Self::new(load_snapshot(path)?))
    }
}

/// Read a snapshot file. YAML is a superset of JSON, so both formats parse.
pub fn load_snapshot(path: &Path) -> StoreResult<ConsoleSnapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read snapshot: {}", path.display()))?;
    parse_snapshot(&contents)
}

pub fn parse_snapshot(contents: &str) -> StoreResult<ConsoleSnapshot> {
    serde_yaml::from_str(contents).map_err(|err| StoreError::InvalidSnapshot(err.to_string()))
}

fn record_sizes(snapshot: &ConsoleSnapshot) {
    metrics::gauge!("owl_snapshot_roles").set(snapshot.access.roles.len() as f64);
    metrics::gauge!("owl_snapshot_role_bindings").set(snapshot.access.role_bindings.len() as f64);
    metrics::gauge!("owl_snapshot_users").set(snapshot.access.users.len() as f64);
    metrics::gauge!("owl_snapshot_acl_resources").set(snapshot.access.acl_resources.len() as f64);
    metrics::gauge!("owl_snapshot_topics").set(snapshot.topics.len() as f64);
}

#[async_trait]
impl ConsoleStore for InMemoryStore {
    async fn snapshot(&self) -> StoreResult<Arc<ConsoleSnapshot>> {
        Ok(self.current.read().await.clone())
    }

    async fn replace(&self, snapshot: ConsoleSnapshot) -> StoreResult<()> {
        record_sizes(&snapshot);
        let mut current = self.current.write().await;
        *current = Arc::new(snapshot);
        tracing::info!("console snapshot replaced");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
