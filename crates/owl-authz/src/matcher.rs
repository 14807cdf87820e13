use crate::AclPatternType;

const WILDCARD: &str = "*";

/// Match a permission's `resourceName` against a concrete resource name.
///
/// `*` matches everything, a trailing `*` turns the rest into a prefix, and
/// anything else must be equal. No other position of `*` is special.
pub fn resource_name_matches(pattern: &str, name: &str) -> bool {
    if pattern == WILDCARD {
        return true;
    }
    match pattern.strip_suffix('*') {
        Some(prefix) => name.starts_with(prefix),
        None => pattern == name,
    }
}

/// Decide whether a stored ACL resource pattern is selected by a filter.
///
/// An empty `query_name` behaves like an absent one.
pub fn pattern_matches(
    stored_name: &str,
    stored_pattern: AclPatternType,
    query_name: Option<&str>,
    filter: AclPatternType,
) -> bool {
    let query_name = query_name.filter(|name| !name.is_empty());
    if filter.is_unknown() {
        return false;
    }

    match filter {
        AclPatternType::Any => match query_name {
            None => true,
            Some(name) => !stored_pattern.is_unknown() && stored_name == name,
        },
        AclPatternType::Match => {
            let Some(name) = query_name else {
                return true;
            };
            match stored_pattern {
                AclPatternType::Literal => stored_name == name || stored_name == WILDCARD,
                AclPatternType::Prefixed => name.starts_with(stored_name),
                _ => false,
            }
        }
        AclPatternType::Literal => {
            stored_pattern == AclPatternType::Literal
                && query_name.is_none_or(|name| stored_name == name)
        }
        AclPatternType::Prefixed => {
            stored_pattern == AclPatternType::Prefixed
                && query_name.is_none_or(|name| name.starts_with(stored_name))
        }
        AclPatternType::Unknown => false,
    }
}
