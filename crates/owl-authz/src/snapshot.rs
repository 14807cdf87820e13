//! Immutable access-control tables handed to every evaluation.
//!
//! # Purpose
//! Bundles the role, binding, user and ACL tables that one request evaluates
//! against, so callers pass a single consistent snapshot instead of reaching
//! for global state.
//!
//! # Key invariants
//! - A snapshot is never mutated after construction; refreshing means building
//!   a new one and swapping it in (typically behind an `Arc`).
//! - All methods are pure reads and safe to call from many threads at once.
use crate::{
    AclRequest, AclResource, AdminInfo, AuthzResult, FilterOptions, ResolvedAccess, Role,
    RoleBinding, UserDetails, UserDetailsView, evaluate_acls_with, resolve_bindings,
    resolve_roles,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSnapshot {
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub role_bindings: Vec<RoleBinding>,
    #[serde(default)]
    pub users: Vec<UserDetails>,
    #[serde(default)]
    pub acl_resources: Vec<AclResource>,
}

impl AccessSnapshot {
    pub fn find_user(&self, internal_identifier: &str) -> Option<&UserDetails> {
        self.users
            .iter()
            .find(|user| user.internal_identifier == internal_identifier)
    }

    pub fn resolve_user(&self, user: &UserDetails) -> ResolvedAccess {
        let access = resolve_roles(&user.binding_ids, &self.role_bindings, &self.roles);
        for reference in &access.unresolved {
            tracing::debug!(
                user = %user.internal_identifier,
                %reference,
                "ignoring unresolved rbac reference"
            );
        }
        access
    }

    pub fn list_acls(
        &self,
        request: &AclRequest,
        options: FilterOptions,
    ) -> AuthzResult<Vec<AclResource>> {
        evaluate_acls_with(request, &self.acl_resources, options)
    }

    pub fn admin_info(&self) -> AdminInfo {
        let users = self
            .users
            .iter()
            .map(|user| UserDetailsView::new(user.clone(), self.resolve_user(user)))
            .collect();
        AdminInfo {
            roles: self.roles.clone(),
            role_bindings: resolve_bindings(&self.role_bindings, &self.roles),
            users,
        }
    }
}
