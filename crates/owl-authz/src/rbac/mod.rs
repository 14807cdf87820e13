//! RBAC resolution path: role graph, aggregation, projection.
mod aggregator;
mod projector;
mod resolver;
mod views;

pub use aggregator::{is_action_allowed, is_allowed, role_allows};
pub use projector::{
    cluster_actions, group_actions, project, topic_actions, topic_permissions,
};
pub use resolver::{GrantedRole, PermissionAudit, ResolvedAccess, UnresolvedReference, resolve_roles};
pub use views::{AdminInfo, RoleBindingView, UserDetailsView, resolve_bindings};
