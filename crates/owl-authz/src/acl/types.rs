//! Kafka ACL vocabularies and the console's ACL transport records.
//!
//! # Purpose
//! Models the four independently wildcardable ACL dimensions (resource type,
//! pattern type, operation, permission type) as tagged enums, plus the stored
//! rule groups and the filter request shape used by ACL listing.
//!
//! # Key invariants
//! - Numeric codes mirror the Kafka admin protocol: `0 = Unknown`, `1 = Any`.
//! - Codes outside the declared range are rejected with
//!   [`AuthzError::InvalidFilter`]; they never degrade to `Unknown`.
//! - Stored records keep Kafka's textual names; labels that do not parse map to
//!   `Unknown` and never match a concrete filter.
use crate::{AuthzError, AuthzResult};
use serde::{Deserialize, Serialize};

macro_rules! acl_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const FIELD: &'static str = $field;

            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn code(self) -> i32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a stored label. Case and `_` separators are ignored;
            /// anything unrecognized becomes `Unknown`.
            pub fn from_label(label: &str) -> Self {
                let normalized: String = label
                    .chars()
                    .filter(|c| *c != '_')
                    .flat_map(char::to_lowercase)
                    .collect();
                $(
                    if normalized == $label.to_lowercase() {
                        return $name::$variant;
                    }
                )+
                $name::Unknown
            }

            pub fn is_unknown(self) -> bool {
                matches!(self, $name::Unknown)
            }

            pub fn is_any(self) -> bool {
                matches!(self, $name::Any)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = AuthzError;

            fn try_from(code: i32) -> AuthzResult<Self> {
                $name::from_code(code).ok_or(AuthzError::InvalidFilter {
                    field: $field,
                    code,
                })
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

acl_enum! {
    AclResourceType, "resourceType" {
        Unknown = 0 => "Unknown",
        Any = 1 => "Any",
        Topic = 2 => "Topic",
        Group = 3 => "Group",
        Cluster = 4 => "Cluster",
        TransactionalId = 5 => "TransactionalID",
    }
}

acl_enum! {
    /// Used both as the query filter and as the stored pattern type. Stored
    /// resources are only ever `Literal` or `Prefixed`.
    AclPatternType, "resourcePatternTypeFilter" {
        Unknown = 0 => "Unknown",
        Any = 1 => "Any",
        Match = 2 => "Match",
        Literal = 3 => "Literal",
        Prefixed = 4 => "Prefixed",
    }
}

acl_enum! {
    AclOperation, "operation" {
        Unknown = 0 => "Unknown",
        Any = 1 => "Any",
        All = 2 => "All",
        Read = 3 => "Read",
        Write = 4 => "Write",
        Create = 5 => "Create",
        Delete = 6 => "Delete",
        Alter = 7 => "Alter",
        Describe = 8 => "Describe",
        ClusterAction = 9 => "ClusterAction",
        DescribeConfigs = 10 => "DescribeConfigs",
        AlterConfigs = 11 => "AlterConfigs",
        IdempotentWrite = 12 => "IdempotentWrite",
    }
}

acl_enum! {
    AclPermissionType, "permissionType" {
        Unknown = 0 => "Unknown",
        Any = 1 => "Any",
        Deny = 2 => "Deny",
        Allow = 3 => "Allow",
    }
}

impl AclResourceType {
    pub fn is_wildcard(self) -> bool {
        self.is_any()
    }
}

impl AclPatternType {
    pub fn is_wildcard(self) -> bool {
        self.is_any()
    }
}

impl AclOperation {
    /// As a filter, `All` selects every stored operation just like `Any`.
    pub fn is_wildcard(self) -> bool {
        matches!(self, AclOperation::Any | AclOperation::All)
    }
}

impl AclPermissionType {
    pub fn is_wildcard(self) -> bool {
        self.is_any()
    }
}

/// One stored ACL entry attached to a resource pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclRule {
    pub principal: String,
    pub host: String,
    pub operation: String,
    pub permission_type: String,
}

/// All ACL entries stored for one resource pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclResource {
    pub resource_type: String,
    pub resource_name: String,
    pub resource_pattern_type: String,
    #[serde(default)]
    pub acls: Vec<AclRule>,
}

impl AclResource {
    pub fn resource_type(&self) -> AclResourceType {
        AclResourceType::from_label(&self.resource_type)
    }

    pub fn pattern_type(&self) -> AclPatternType {
        AclPatternType::from_label(&self.resource_pattern_type)
    }
}

/// Raw ACL listing filter as received from the console.
///
/// Enum dimensions stay numeric here so that out-of-range values can be
/// reported instead of failing deserialization of the whole request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclRequest {
    pub resource_type: i32,
    #[serde(default)]
    pub resource_name: Option<String>,
    pub resource_pattern_type_filter: i32,
    #[serde(default)]
    pub principal: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    pub operation: i32,
    pub permission_type: i32,
}

impl Default for AclRequest {
    /// Lists everything.
    fn default() -> Self {
        Self {
            resource_type: AclResourceType::Any.code(),
            resource_name: None,
            resource_pattern_type_filter: AclPatternType::Any.code(),
            principal: None,
            host: None,
            operation: AclOperation::Any.code(),
            permission_type: AclPermissionType::Any.code(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclResponse {
    pub acl_resources: Vec<AclResource>,
}
