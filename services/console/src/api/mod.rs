//! Console HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules and the shared caller lookup: every
//! RBAC-gated handler identifies the caller by header, loads the current
//! snapshot once and resolves the caller's roles against it.
pub mod acls;
pub mod admin;
pub mod error;
pub mod groups;
pub mod system;
pub mod topics;
pub mod types;
pub mod users;

use crate::api::error::{ApiError, api_forbidden, api_internal, api_not_found, api_unauthenticated};
use crate::app::AppState;
use crate::store::ConsoleSnapshot;
use axum::http::HeaderMap;
use owl_authz::{
    ClusterAction, ResolvedAccess, Role, UserDetails, cluster_actions, cluster_resource,
    is_action_allowed,
};
use std::sync::Arc;

/// A request's caller resolved against one snapshot.
pub(crate) struct Caller {
    pub snapshot: Arc<ConsoleSnapshot>,
    pub user: UserDetails,
    pub access: ResolvedAccess,
}

impl Caller {
    pub fn roles(&self) -> Vec<&Role> {
        self.access.role_refs()
    }

    pub fn cluster_actions(&self) -> Vec<ClusterAction> {
        cluster_actions(&self.roles())
    }

    pub fn require(&self, action: ClusterAction) -> Result<(), ApiError> {
        if is_action_allowed(&self.roles(), &cluster_resource(), action) {
            return Ok(());
        }
        tracing::info!(
            user = %self.user.internal_identifier,
            %action,
            "cluster action denied"
        );
        Err(api_forbidden(&format!("missing cluster permission {action}")))
    }
}

pub(crate) async fn resolve_caller(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Caller, ApiError> {
    let identifier = headers
        .get(state.user_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| api_unauthenticated("missing caller identity"))?;
    let snapshot = state
        .store
        .snapshot()
        .await
        .map_err(|err| api_internal("failed to load snapshot", &err))?;
    let user = snapshot
        .access
        .find_user(identifier)
        .cloned()
        .ok_or_else(|| api_not_found("user not found"))?;
    let access = snapshot.access.resolve_user(&user);
    metrics::counter!("owl_rbac_resolutions_total").increment(1);
    Ok(Caller {
        snapshot,
        user,
        access,
    })
}
