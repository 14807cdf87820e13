//! Resource identities that RBAC permissions are evaluated against.
//!
//! # Purpose
//! Pairs a resource kind (the numeric `resourceId` discriminator carried by
//! permissions) with the concrete name of a topic, consumer group, or the
//! cluster itself.
//!
//! # Key invariants
//! - Unrecognized discriminators are preserved as [`ResourceKind::Other`] and
//!   only ever match permissions carrying the same code.
//! - Cluster scope always uses [`CLUSTER_RESOURCE_NAME`].
//!
//! # Examples
//! ```rust
//! use owl_authz::{ResourceKind, topic_resource};
//!
//! let resource = topic_resource("orders");
//! assert_eq!(resource.kind, ResourceKind::Topic);
//! assert_eq!(resource.name, "orders");
//! ```
use serde::{Deserialize, Serialize};

pub const CLUSTER_RESOURCE_NAME: &str = "kafka-cluster";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ResourceKind {
    Cluster,
    Topic,
    ConsumerGroup,
    Other(u32),
}

impl ResourceKind {
    pub fn code(self) -> u32 {
        match self {
            ResourceKind::Cluster => 1,
            ResourceKind::Topic => 2,
            ResourceKind::ConsumerGroup => 3,
            ResourceKind::Other(code) => code,
        }
    }
}

impl From<u32> for ResourceKind {
    fn from(code: u32) -> Self {
        match code {
            1 => ResourceKind::Cluster,
            2 => ResourceKind::Topic,
            3 => ResourceKind::ConsumerGroup,
            other => ResourceKind::Other(other),
        }
    }
}

impl From<ResourceKind> for u32 {
    fn from(kind: ResourceKind) -> Self {
        kind.code()
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Cluster => f.write_str("cluster"),
            ResourceKind::Topic => f.write_str("topic"),
            ResourceKind::ConsumerGroup => f.write_str("consumerGroup"),
            ResourceKind::Other(code) => write!(f, "resource#{code}"),
        }
    }
}

/// A concrete resource a user wants to act on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    pub kind: ResourceKind,
    pub name: String,
}

impl Resource {
    pub fn new(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

pub fn topic_resource(topic_name: impl Into<String>) -> Resource {
    Resource::new(ResourceKind::Topic, topic_name)
}

pub fn group_resource(group_id: impl Into<String>) -> Resource {
    Resource::new(ResourceKind::ConsumerGroup, group_id)
}

pub fn cluster_resource() -> Resource {
    Resource::new(ResourceKind::Cluster, CLUSTER_RESOURCE_NAME)
}
