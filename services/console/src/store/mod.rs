//! Snapshot storage for the console service.
//!
//! # Purpose
//! Holds the current [`ConsoleSnapshot`]: the access-control tables plus the
//! cluster metadata that handlers annotate.
//!
//! # Key invariants
//! - Readers receive an `Arc` to an immutable snapshot; `replace` swaps the
//!   whole snapshot and never mutates one in place.
use crate::model::{GroupDescription, TopicDetail};
use async_trait::async_trait;
use owl_authz::AccessSnapshot;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSnapshot {
    #[serde(flatten)]
    pub access: AccessSnapshot,
    #[serde(default)]
    pub topics: Vec<TopicDetail>,
    #[serde(default)]
    pub consumer_groups: Vec<GroupDescription>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ConsoleStore: Send + Sync {
    async fn snapshot(&self) -> StoreResult<Arc<ConsoleSnapshot>>;
    async fn replace(&self, snapshot: ConsoleSnapshot) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
