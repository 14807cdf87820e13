//! Derived RBAC views merged into transport records at the boundary.
//!
//! The base records ([`UserDetails`], [`RoleBinding`]) belong to the RBAC
//! store. The views here wrap them with what the engine derives, instead of
//! writing derived fields back into the stored records.
use crate::rbac::resolver::{GrantedRole, ResolvedAccess, index_roles};
use crate::{Role, RoleBinding, UserDetails};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBindingView {
    #[serde(flatten)]
    pub binding: RoleBinding,
    /// Absent when the binding points at a role that no longer exists.
    pub resolved_role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsView {
    #[serde(flatten)]
    pub details: UserDetails,
    pub bindings: Vec<RoleBinding>,
    pub granted_roles: Vec<GrantedRole>,
}

impl UserDetailsView {
    /// Replaces the stored `audits` with the map derived from `access`.
    pub fn new(mut details: UserDetails, access: ResolvedAccess) -> Self {
        details.audits = access.audits();
        Self {
            details,
            bindings: access.bindings,
            granted_roles: access.granted_roles,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
    pub roles: Vec<Role>,
    pub role_bindings: Vec<RoleBindingView>,
    pub users: Vec<UserDetailsView>,
}

pub fn resolve_bindings(bindings: &[RoleBinding], roles: &[Role]) -> Vec<RoleBindingView> {
    let roles_by_name = index_roles(roles);
    bindings
        .iter()
        .map(|binding| RoleBindingView {
            binding: binding.clone(),
            resolved_role: roles_by_name
                .get(binding.role_name.as_str())
                .map(|role| (*role).clone()),
        })
        .collect()
}
