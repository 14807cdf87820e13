//! Kafka-native ACL listing.
//!
//! Independent of RBAC: the evaluator only ever looks at stored ACL rule groups.
mod filter;
mod types;

pub use filter::{
    AclFilter, FilterOptions, UnknownFilterPolicy, evaluate_acls, evaluate_acls_with,
};
pub use types::{
    AclOperation, AclPatternType, AclPermissionType, AclRequest, AclResource, AclResourceType,
    AclResponse, AclRule,
};
