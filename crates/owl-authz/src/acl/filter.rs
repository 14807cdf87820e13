//! ACL filter evaluation over stored rule groups.
//!
//! # Purpose
//! Answers ACL listing queries: given an [`AclRequest`], select the stored
//! [`AclResource`] groups whose pattern matches and keep only the rules that
//! satisfy the rule-level dimensions.
//!
//! # Key invariants
//! - Results stay grouped by resource; a group is returned only when at least
//!   one of its rules survives, and it carries only the surviving rules.
//! - A filter that does not constrain rules at all returns the selected groups
//!   unchanged, including groups that have no rules.
//! - Out-of-range codes fail the whole request; there are no partial results.
//! - `Unknown` in a filter dimension either selects nothing or is rejected,
//!   depending on [`UnknownFilterPolicy`], and does so for every dimension alike.
//!
//! # Examples
//! ```rust
//! use owl_authz::{AclRequest, AclResource, evaluate_acls};
//!
//! let stored = vec![AclResource {
//!     resource_type: "Topic".to_string(),
//!     resource_name: "orders".to_string(),
//!     resource_pattern_type: "Literal".to_string(),
//!     acls: Vec::new(),
//! }];
//! let listed = evaluate_acls(&AclRequest::default(), &stored).unwrap();
//! assert_eq!(listed, stored);
//! ```
use crate::matcher::pattern_matches;
use crate::{
    AclOperation, AclPatternType, AclPermissionType, AclRequest, AclResource, AclResourceType,
    AclRule, AuthzError, AuthzResult,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownFilterPolicy {
    #[default]
    MatchNone,
    Reject,
}

impl std::str::FromStr for UnknownFilterPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "match_none" => Ok(UnknownFilterPolicy::MatchNone),
            "reject" => Ok(UnknownFilterPolicy::Reject),
            other => Err(format!("unknown filter policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub unknown: UnknownFilterPolicy,
}

/// A validated [`AclRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclFilter {
    pub resource_type: AclResourceType,
    pub resource_name: Option<String>,
    pub pattern_type: AclPatternType,
    pub principal: Option<String>,
    pub host: Option<String>,
    pub operation: AclOperation,
    pub permission_type: AclPermissionType,
}

impl TryFrom<&AclRequest> for AclFilter {
    type Error = AuthzError;

    fn try_from(request: &AclRequest) -> AuthzResult<Self> {
        Ok(Self {
            resource_type: AclResourceType::try_from(request.resource_type)?,
            resource_name: non_empty(&request.resource_name),
            pattern_type: AclPatternType::try_from(request.resource_pattern_type_filter)?,
            principal: non_empty(&request.principal),
            host: non_empty(&request.host),
            operation: AclOperation::try_from(request.operation)?,
            permission_type: AclPermissionType::try_from(request.permission_type)?,
        })
    }
}

impl AclFilter {
    /// First dimension set to `Unknown`, by its wire field name.
    pub fn unknown_field(&self) -> Option<&'static str> {
        if self.resource_type.is_unknown() {
            Some(AclResourceType::FIELD)
        } else if self.pattern_type.is_unknown() {
            Some(AclPatternType::FIELD)
        } else if self.operation.is_unknown() {
            Some(AclOperation::FIELD)
        } else if self.permission_type.is_unknown() {
            Some(AclPermissionType::FIELD)
        } else {
            None
        }
    }

    pub fn selects_resource(&self, resource: &AclResource) -> bool {
        if !self.resource_type.is_wildcard() && resource.resource_type() != self.resource_type {
            return false;
        }
        pattern_matches(
            &resource.resource_name,
            resource.pattern_type(),
            self.resource_name.as_deref(),
            self.pattern_type,
        )
    }

    pub fn selects_rule(&self, rule: &AclRule) -> bool {
        if !self.operation.is_wildcard()
            && AclOperation::from_label(&rule.operation) != self.operation
        {
            return false;
        }
        if !self.permission_type.is_wildcard()
            && AclPermissionType::from_label(&rule.permission_type) != self.permission_type
        {
            return false;
        }
        if let Some(principal) = &self.principal {
            if rule.principal != *principal {
                return false;
            }
        }
        if let Some(host) = &self.host {
            if rule.host != *host {
                return false;
            }
        }
        true
    }

    /// When false, selected groups pass through whole, even with no rules, so an
    /// all-`Any` listing returns the stored table unchanged.
    fn constrains_rules(&self) -> bool {
        !self.operation.is_wildcard()
            || !self.permission_type.is_wildcard()
            || self.principal.is_some()
            || self.host.is_some()
    }

    pub fn apply(&self, resources: &[AclResource]) -> Vec<AclResource> {
        let constrained = self.constrains_rules();
        resources
            .iter()
            .filter(|resource| self.selects_resource(resource))
            .filter_map(|resource| {
                if !constrained {
                    return Some(resource.clone());
                }
                let acls: Vec<AclRule> = resource
                    .acls
                    .iter()
                    .filter(|rule| self.selects_rule(rule))
                    .cloned()
                    .collect();
                if acls.is_empty() {
                    return None;
                }
                Some(AclResource {
                    resource_type: resource.resource_type.clone(),
                    resource_name: resource.resource_name.clone(),
                    resource_pattern_type: resource.resource_pattern_type.clone(),
                    acls,
                })
            })
            .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|value| !value.is_empty()).cloned()
}

/// Evaluate an ACL listing request with the default options.
pub fn evaluate_acls(
    request: &AclRequest,
    resources: &[AclResource],
) -> AuthzResult<Vec<AclResource>> {
    evaluate_acls_with(request, resources, FilterOptions::default())
}

pub fn evaluate_acls_with(
    request: &AclRequest,
    resources: &[AclResource],
    options: FilterOptions,
) -> AuthzResult<Vec<AclResource>> {
    let filter = AclFilter::try_from(request)?;

    if let Some(field) = filter.unknown_field() {
        return match options.unknown {
            UnknownFilterPolicy::Reject => Err(AuthzError::UnknownFilter { field }),
            UnknownFilterPolicy::MatchNone => {
                tracing::debug!(field, "acl filter has an Unknown dimension; selecting nothing");
                Ok(Vec::new())
            }
        };
    }

    let selected = filter.apply(resources);
    tracing::trace!(
        stored = resources.len(),
        selected = selected.len(),
        "evaluated acl filter"
    );
    Ok(selected)
}
