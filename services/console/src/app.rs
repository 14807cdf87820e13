//! Console HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
use crate::api;
use crate::store::ConsoleStore;
use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use owl_authz::FilterOptions;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConsoleStore>,
    pub filter_options: FilterOptions,
    /// Lowercase name of the header carrying the caller's internal identifier.
    pub user_header: String,
    pub metrics: PrometheusHandle,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route("/api/health", get(api::system::health))
        .route("/api/acls", get(api::acls::list_acls))
        .route("/api/admin", get(api::admin::admin_info))
        .route("/api/users/me", get(api::users::current_user))
        .route("/api/topics", get(api::topics::list_topics))
        .route(
            "/api/topics/:topic/permissions",
            get(api::topics::get_topic_permissions),
        )
        .route(
            "/api/consumer-groups",
            get(api::groups::list_consumer_groups),
        )
        .route("/metrics", get(api::system::metrics))
        .layer(trace_layer)
        .with_state(state)
}
