//! Effective-permission resolution for the Owl Kafka console.
//!
//! # Purpose
//! Turns RBAC role bindings into per-resource allowed actions and answers
//! Kafka ACL listing queries against stored ACL rules.
//!
//! # How it fits
//! The console service loads role, binding, user and ACL tables into an
//! [`AccessSnapshot`] and calls into this crate once per request. Topic and
//! consumer-group records are annotated at the service boundary with the
//! actions projected here.
//!
//! # Key invariants
//! - Everything is a pure function over borrowed, immutable tables. No I/O,
//!   no global state, no locking.
//! - Roles combine by union; within a permission, `includes` beat `excludes`.
//! - ACL filters mirror Kafka's pattern semantics; out-of-range enum codes are
//!   rejected, never coerced.
//! - RBAC results are advisory and gate the console UI only. Brokers still
//!   enforce their own ACLs.
//!
//! # Examples
//! ```rust
//! use owl_authz::{
//!     ActionSet, BindingId, Permission, ResourceKind, Role, RoleBinding, TopicAction,
//!     resolve_roles, topic_actions,
//! };
//!
//! let roles = vec![Role::new(
//!     "viewer",
//!     vec![Permission::new(ResourceKind::Topic, "*")
//!         .with_allowed(ActionSet::from_iter(["seeTopic", "viewConfig"]))],
//! )];
//! let bindings = vec![RoleBinding::new("B1", "viewer")];
//! let access = resolve_roles(&[BindingId::new("B1")], &bindings, &roles);
//!
//! let actions = topic_actions("orders", &access.role_refs());
//! assert_eq!(actions, vec![TopicAction::SeeTopic, TopicAction::ViewConfig]);
//! ```
//!
//! # Common pitfalls
//! - A permission's `resourceName` only prefix-matches when it ends in `*`.
//! - `includes` never grants an action that `allowedActions` does not list.
mod acl;
mod action;
mod errors;
mod matcher;
mod permission;
mod rbac;
mod resource;
mod role;
mod snapshot;
mod types;

pub use acl::{
    AclFilter, AclOperation, AclPatternType, AclPermissionType, AclRequest, AclResource,
    AclResourceType, AclResponse, AclRule, FilterOptions, UnknownFilterPolicy, evaluate_acls,
    evaluate_acls_with,
};
pub use action::{ClusterAction, GroupAction, ResourceAction, TopicAction, TopicPermissions};
pub use errors::{AuthzError, AuthzResult};
pub use matcher::{pattern_matches, resource_name_matches};
pub use permission::{ActionSet, Permission};
pub use rbac::{
    AdminInfo, GrantedRole, PermissionAudit, ResolvedAccess, RoleBindingView,
    UnresolvedReference, UserDetailsView, cluster_actions, group_actions, is_action_allowed,
    is_allowed, project, resolve_bindings, resolve_roles, role_allows, topic_actions,
    topic_permissions,
};
pub use resource::{
    CLUSTER_RESOURCE_NAME, Resource, ResourceKind, cluster_resource, group_resource,
    topic_resource,
};
pub use role::{Role, RoleBinding, Subject, UserDetails};
pub use snapshot::AccessSnapshot;
pub use types::{BindingId, RoleName};
