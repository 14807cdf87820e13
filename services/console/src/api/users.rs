use crate::api::error::ApiError;
use crate::api::resolve_caller;
use crate::api::types::UserProfile;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use owl_authz::{ClusterAction, UserDetailsView};

/// The caller's bindings, granted roles and console capability flags.
pub(crate) async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, ApiError> {
    let caller = resolve_caller(&state, &headers).await?;
    let cluster_actions = caller.cluster_actions();
    let permission_audits = caller.access.permission_audits();
    Ok(Json(UserProfile {
        can_manage_console: cluster_actions.contains(&ClusterAction::ManageConsole),
        can_list_acls: cluster_actions.contains(&ClusterAction::ListAcls),
        cluster_actions,
        permission_audits,
        user: UserDetailsView::new(caller.user, caller.access),
    }))
}
