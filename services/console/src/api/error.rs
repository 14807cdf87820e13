//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Keeps error bodies uniform across console endpoints and translates engine
//! and store failures into HTTP responses.
//!
//! # Key invariants and assumptions
//! - Every error body carries a stable `code` and a human-readable `message`.
//! - Store failures are logged server-side and returned as a generic `internal`.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use owl_authz::AuthzError;

/// Structured API error returned by handlers.
///
/// # Invariants
/// - `status` must match the semantics of `body.code`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, code: &str, message: &str) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
                request_id: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        let code = match err {
            AuthzError::InvalidFilter { .. } => "invalid_filter",
            AuthzError::UnknownFilter { .. } => "unknown_filter",
            AuthzError::InvalidAction(_) => "invalid_action",
        };
        ApiError::new(StatusCode::BAD_REQUEST, code, &err.to_string())
    }
}

pub fn api_not_found(message: &str) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "not_found", message)
}

/// Build a 401 for requests that carry no caller identity.
pub fn api_unauthenticated(message: &str) -> ApiError {
    ApiError::new(StatusCode::UNAUTHORIZED, "unauthenticated", message)
}

pub fn api_forbidden(message: &str) -> ApiError {
    ApiError::new(StatusCode::FORBIDDEN, "forbidden", message)
}

/// Build a 500 from a store error.
///
/// # Errors
/// - Does not fail. The store error is logged, never echoed to the client.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "console storage error");
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}
