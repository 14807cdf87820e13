use crate::model::{GroupDescriptionView, TopicDetailView};
use owl_authz::{
    AclOperation, AclPatternType, AclPermissionType, AclRequest, AclResourceType, AuthzError,
    AuthzResult, ClusterAction, PermissionAudit, UserDetailsView,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub request_id: Option<String>,
}

/// Query string of `GET /api/acls`. Omitted enum dimensions default to `Any`.
///
/// Enum codes arrive as raw strings so that oversized or non-numeric values
/// surface as [`AuthzError::InvalidFilter`] rather than an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclQuery {
    pub resource_type: Option<String>,
    pub resource_name: Option<String>,
    pub resource_pattern_type_filter: Option<String>,
    pub principal: Option<String>,
    pub host: Option<String>,
    pub operation: Option<String>,
    pub permission_type: Option<String>,
}

/// Parse one enum dimension. Values beyond `i32` saturate and non-integers
/// report code `-1`; both then fail validation in the engine.
fn dimension_code(field: &'static str, raw: Option<&str>, default: i32) -> AuthzResult<i32> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(default);
    };
    match raw.parse::<i64>() {
        Ok(code) => Ok(code.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32),
        Err(_) => Err(AuthzError::InvalidFilter { field, code: -1 }),
    }
}

impl TryFrom<AclQuery> for AclRequest {
    type Error = AuthzError;

    fn try_from(query: AclQuery) -> AuthzResult<Self> {
        let any = AclRequest::default();
        Ok(AclRequest {
            resource_type: dimension_code(
                AclResourceType::FIELD,
                query.resource_type.as_deref(),
                any.resource_type,
            )?,
            resource_name: query.resource_name,
            resource_pattern_type_filter: dimension_code(
                AclPatternType::FIELD,
                query.resource_pattern_type_filter.as_deref(),
                any.resource_pattern_type_filter,
            )?,
            principal: query.principal,
            host: query.host,
            operation: dimension_code(
                AclOperation::FIELD,
                query.operation.as_deref(),
                any.operation,
            )?,
            permission_type: dimension_code(
                AclPermissionType::FIELD,
                query.permission_type.as_deref(),
                any.permission_type,
            )?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTopicsResponse {
    pub topics: Vec<TopicDetailView>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConsumerGroupsResponse {
    pub consumer_groups: Vec<GroupDescriptionView>,
}

/// The caller's own view plus the console-wide capability flags.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: UserDetailsView,
    pub can_manage_console: bool,
    pub can_list_acls: bool,
    pub cluster_actions: Vec<ClusterAction>,
    /// One entry per `(role, binding)` grant.
    pub permission_audits: Vec<PermissionAudit>,
}
