//! RBAC permission records and action-list normalization.
//!
//! # Purpose
//! Defines [`Permission`], the unit a [`crate::Role`] is built from, and the
//! normalized [`ActionSet`] used for its `allowedActions`, `includes` and
//! `excludes` lists.
//!
//! # Key invariants
//! - Action lists may arrive missing, `null`, or as `[""]`; all of these
//!   normalize to the empty set. Empty entries are dropped everywhere.
//! - `*` (or the `all` marker) inside an action list stands for every action.
//! - `excludes` is applied after `allowedActions`, and an action listed in
//!   `includes` survives its exclusion.
//!
//! # Examples
//! ```rust
//! use owl_authz::{ActionSet, Permission, ResourceKind, topic_resource};
//!
//! let permission = Permission::new(ResourceKind::Topic, "orders-*")
//!     .with_allowed(ActionSet::all())
//!     .with_excludes(ActionSet::from_iter(["viewMessages"]));
//! assert!(permission.grants(&topic_resource("orders-eu"), "seeTopic"));
//! assert!(!permission.grants(&topic_resource("orders-eu"), "viewMessages"));
//! ```
use crate::matcher::resource_name_matches;
use crate::{Resource, ResourceKind};
use serde::{Deserialize, Deserializer, Serialize};

const ALL_ACTIONS: &str = "*";
const ALL_MARKER: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionSet(Vec<String>);

impl ActionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self(vec![ALL_ACTIONS.to_string()])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, action: &str) -> bool {
        self.0
            .iter()
            .any(|entry| entry == ALL_ACTIONS || entry == ALL_MARKER || entry == action)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for ActionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut actions: Vec<String> = Vec::new();
        for action in iter {
            let action = action.into();
            if action.is_empty() || actions.contains(&action) {
                continue;
            }
            actions.push(action);
        }
        Self(actions)
    }
}

impl<'de> Deserialize<'de> for ActionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
        Ok(raw.unwrap_or_default().into_iter().collect())
    }
}

/// One grantable rule inside a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub resource_name: String,
    pub resource_id: ResourceKind,
    #[serde(default)]
    pub allowed_actions: ActionSet,
    #[serde(default)]
    pub includes: ActionSet,
    #[serde(default)]
    pub excludes: ActionSet,
}

impl Permission {
    pub fn new(resource_id: ResourceKind, resource_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            resource_id,
            allowed_actions: ActionSet::empty(),
            includes: ActionSet::empty(),
            excludes: ActionSet::empty(),
        }
    }

    pub fn with_allowed(mut self, actions: ActionSet) -> Self {
        self.allowed_actions = actions;
        self
    }

    pub fn with_includes(mut self, actions: ActionSet) -> Self {
        self.includes = actions;
        self
    }

    pub fn with_excludes(mut self, actions: ActionSet) -> Self {
        self.excludes = actions;
        self
    }

    pub fn applies_to(&self, resource: &Resource) -> bool {
        self.resource_id == resource.kind && resource_name_matches(&self.resource_name, &resource.name)
    }

    /// Whether this permission alone allows `action` on `resource`.
    pub fn grants(&self, resource: &Resource, action: &str) -> bool {
        if !self.applies_to(resource) || !self.allowed_actions.contains(action) {
            return false;
        }
        !self.excludes.contains(action) || self.includes.contains(action)
    }
}
