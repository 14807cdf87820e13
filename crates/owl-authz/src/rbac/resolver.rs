//! Role graph resolution.
//!
//! # Purpose
//! Expands a user's `bindingIds` into the bindings they reference and the
//! roles those bindings grant.
//!
//! # Key invariants
//! - Dangling binding ids and role names are skipped and reported as
//!   [`UnresolvedReference`]s; they never fail resolution.
//! - Every granted role appears exactly once; bindings granting the same role
//!   collapse into its `granted_by` list.
//! - Output order is first-seen order along `binding_ids`; a repeated id is
//!   only counted the first time.
use crate::{BindingId, Role, RoleBinding, RoleName};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedRole {
    pub role: Role,
    pub granted_by: Vec<RoleBinding>,
}

/// One `(role, binding)` grant, flattened for audit listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionAudit {
    pub role_name: RoleName,
    pub granted_by: BindingId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReference {
    Binding(BindingId),
    Role { binding: BindingId, role: RoleName },
}

impl std::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnresolvedReference::Binding(id) => write!(f, "role binding {id} not found"),
            UnresolvedReference::Role { binding, role } => {
                write!(f, "role {role} referenced by binding {binding} not found")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAccess {
    pub bindings: Vec<RoleBinding>,
    pub granted_roles: Vec<GrantedRole>,
    pub unresolved: Vec<UnresolvedReference>,
}

impl ResolvedAccess {
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.granted_roles.iter().map(|granted| &granted.role)
    }

    pub fn role_refs(&self) -> Vec<&Role> {
        self.roles().collect()
    }

    pub fn permission_audits(&self) -> Vec<PermissionAudit> {
        self.granted_roles
            .iter()
            .flat_map(|granted| {
                granted.granted_by.iter().map(|binding| PermissionAudit {
                    role_name: granted.role.name.clone(),
                    granted_by: binding.ephemeral_id.clone(),
                })
            })
            .collect()
    }

    /// Role name to the ephemeral ids that granted it.
    pub fn audits(&self) -> BTreeMap<String, Vec<String>> {
        self.granted_roles
            .iter()
            .map(|granted| {
                let ids = granted
                    .granted_by
                    .iter()
                    .map(|binding| binding.ephemeral_id.to_string())
                    .collect();
                (granted.role.name.to_string(), ids)
            })
            .collect()
    }
}

/// Index a role table by name. The first role wins if a name is duplicated.
pub(crate) fn index_roles(roles: &[Role]) -> HashMap<&str, &Role> {
    let mut by_name: HashMap<&str, &Role> = HashMap::with_capacity(roles.len());
    for role in roles {
        by_name.entry(role.name.as_str()).or_insert(role);
    }
    by_name
}

pub fn resolve_roles(
    binding_ids: &[BindingId],
    bindings: &[RoleBinding],
    roles: &[Role],
) -> ResolvedAccess {
    let mut bindings_by_id: HashMap<&str, &RoleBinding> = HashMap::with_capacity(bindings.len());
    for binding in bindings {
        bindings_by_id
            .entry(binding.ephemeral_id.as_str())
            .or_insert(binding);
    }
    let roles_by_name = index_roles(roles);

    let mut access = ResolvedAccess::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(binding_ids.len());
    let mut slot_by_role: HashMap<&str, usize> = HashMap::new();

    for id in binding_ids {
        if !seen.insert(id.as_str()) {
            continue;
        }
        let Some(&binding) = bindings_by_id.get(id.as_str()) else {
            tracing::debug!(binding_id = %id, "skipping unknown role binding");
            access
                .unresolved
                .push(UnresolvedReference::Binding(id.clone()));
            continue;
        };
        access.bindings.push(binding.clone());

        let Some(&role) = roles_by_name.get(binding.role_name.as_str()) else {
            tracing::debug!(
                binding_id = %id,
                role = %binding.role_name,
                "skipping role binding with unknown role"
            );
            access.unresolved.push(UnresolvedReference::Role {
                binding: id.clone(),
                role: binding.role_name.clone(),
            });
            continue;
        };

        // Bindings granting an already seen role join its entry.
        match slot_by_role.get(role.name.as_str()).copied() {
            Some(slot) => access.granted_roles[slot]
                .granted_by
                .push(binding.clone()),
            None => {
                slot_by_role.insert(role.name.as_str(), access.granted_roles.len());
                access.granted_roles.push(GrantedRole {
                    role: role.clone(),
                    granted_by: vec![binding.clone()],
                });
            }
        }
    }

    access
}
