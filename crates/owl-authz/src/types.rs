//! Strongly typed identifiers for RBAC records.
//!
//! # Purpose
//! Wraps the string keys that link bindings to roles so a binding id can never
//! be passed where a role name is expected.
//!
//! # Key invariants
//! - Display, `as_str` and serde all pass the original value through untouched.
//! - Comparison is exact and case-sensitive; no normalization happens here.
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// `RoleBinding.ephemeralId`: unique per binding, regenerated on reload.
    BindingId
);

string_id!(
    /// `Role.name`: unique across the role table.
    RoleName
);

#[cfg(test)]
mod tests {
    use super::{BindingId, RoleName};
    use std::collections::HashMap;

    #[test]
    fn type_constructors_and_display() {
        let binding = BindingId::new("rb-1");
        let role = RoleName::from("viewer");

        assert_eq!(binding.as_str(), "rb-1");
        assert_eq!(role.to_string(), "viewer");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&RoleName::new("admin")).unwrap();
        assert_eq!(json, "\"admin\"");
        let parsed: BindingId = serde_json::from_str("\"rb-7\"").unwrap();
        assert_eq!(parsed, BindingId::new("rb-7"));
    }

    #[test]
    fn borrow_allows_str_lookups() {
        let mut map = HashMap::new();
        map.insert(RoleName::new("viewer"), 1);
        assert_eq!(map.get("viewer"), Some(&1));
    }
}
