use crate::api::error::ApiError;
use crate::api::resolve_caller;
use crate::api::types::GetConsumerGroupsResponse;
use crate::app::AppState;
use crate::model::annotate_groups;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

pub(crate) async fn list_consumer_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GetConsumerGroupsResponse>, ApiError> {
    let caller = resolve_caller(&state, &headers).await?;
    let consumer_groups = annotate_groups(&caller.snapshot.consumer_groups, &caller.roles());
    Ok(Json(GetConsumerGroupsResponse { consumer_groups }))
}
