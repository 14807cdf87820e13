//! Administrative RBAC overview.
use crate::api::error::ApiError;
use crate::api::resolve_caller;
use crate::app::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use owl_authz::{AdminInfo, ClusterAction};

/// Every role, binding and user with derived views. Requires `manageConsole`.
pub(crate) async fn admin_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminInfo>, ApiError> {
    let caller = resolve_caller(&state, &headers).await?;
    caller.require(ClusterAction::ManageConsole)?;
    Ok(Json(caller.snapshot.access.admin_info()))
}
