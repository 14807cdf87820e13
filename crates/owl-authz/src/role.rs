//! RBAC configuration records: roles, bindings, subjects and users.
//!
//! These are read-mostly tables owned by the RBAC store. The engine only ever
//! borrows them; derived views live in [`crate::rbac`].
use crate::{BindingId, Permission, RoleName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub name: RoleName,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn new(name: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Self {
            name: RoleName::new(name),
            permissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub organization: String,
    pub subject_kind: u32,
    #[serde(default)]
    pub subject_kind_name: String,
    pub provider: u32,
    #[serde(default)]
    pub provider_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
    pub ephemeral_id: BindingId,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    pub role_name: RoleName,
}

impl RoleBinding {
    pub fn new(ephemeral_id: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            ephemeral_id: BindingId::new(ephemeral_id),
            metadata: BTreeMap::new(),
            subjects: Vec::new(),
            role_name: RoleName::new(role_name),
        }
    }
}

/// A user's stored access assignment, before any resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub internal_identifier: String,
    #[serde(default)]
    pub oauth_user_id: String,
    #[serde(default)]
    pub login_provider_id: u32,
    #[serde(default)]
    pub login_provider: String,
    #[serde(default)]
    pub binding_ids: Vec<BindingId>,
    /// Role name to the ephemeral ids of the bindings that granted it.
    #[serde(default)]
    pub audits: BTreeMap<String, Vec<String>>,
}

impl UserDetails {
    pub fn new(internal_identifier: impl Into<String>, binding_ids: Vec<BindingId>) -> Self {
        Self {
            internal_identifier: internal_identifier.into(),
            oauth_user_id: String::new(),
            login_provider_id: 0,
            login_provider: String::new(),
            binding_ids,
            audits: BTreeMap::new(),
        }
    }
}
