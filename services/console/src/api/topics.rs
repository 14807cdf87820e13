//! Topic listing and per-topic permission handlers.
use crate::api::error::ApiError;
use crate::api::resolve_caller;
use crate::api::types::GetTopicsResponse;
use crate::app::AppState;
use crate::model::annotate_topics;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use owl_authz::{TopicPermissions, topic_permissions};

/// All topics sorted by name, each annotated with the caller's actions.
///
/// Topics the caller may not see are still listed with an empty action list.
pub(crate) async fn list_topics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<GetTopicsResponse>, ApiError> {
    let caller = resolve_caller(&state, &headers).await?;
    let topics = annotate_topics(&caller.snapshot.topics, &caller.roles());
    Ok(Json(GetTopicsResponse { topics }))
}

pub(crate) async fn get_topic_permissions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(topic): Path<String>,
) -> Result<Json<TopicPermissions>, ApiError> {
    let caller = resolve_caller(&state, &headers).await?;
    Ok(Json(topic_permissions(&topic, &caller.roles())))
}
