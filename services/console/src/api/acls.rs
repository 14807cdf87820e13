//! ACL listing handler.
//!
//! # Key invariants and assumptions
//! - The caller needs the cluster `listAcls` action to reach the listing.
//! - Which ACLs are returned depends only on the filter, never on the caller's
//!   roles.
use crate::api::error::ApiError;
use crate::api::resolve_caller;
use crate::api::types::AclQuery;
use crate::app::AppState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use owl_authz::{AclRequest, AclResponse, ClusterAction};

/// List stored ACL bindings matching the query.
///
/// # Errors
/// - 400 `invalid_filter` for out-of-range or non-numeric enum codes.
/// - 400 `unknown_filter` for `Unknown` dimensions under the reject policy.
/// - 401/403/404 from caller resolution.
pub(crate) async fn list_acls(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AclQuery>,
) -> Result<Json<AclResponse>, ApiError> {
    let caller = resolve_caller(&state, &headers).await?;
    caller.require(ClusterAction::ListAcls)?;

    metrics::counter!("owl_acl_queries_total").increment(1);
    let acl_resources = AclRequest::try_from(query)
        .and_then(|request| {
            caller
                .snapshot
                .access
                .list_acls(&request, state.filter_options)
        })
        .inspect_err(|err| {
            metrics::counter!("owl_acl_query_errors_total").increment(1);
            tracing::info!(error = %err, "rejected acl filter");
        })?;
    Ok(Json(AclResponse { acl_resources }))
}
