use crate::{Resource, ResourceAction, Role};
use std::borrow::Borrow;

/// Whether a single role allows `action` on `resource`.
pub fn role_allows(role: &Role, resource: &Resource, action: &str) -> bool {
    role.permissions
        .iter()
        .any(|permission| permission.grants(resource, action))
}

/// Union over roles: allowed as soon as any role allows it.
///
/// There is no deny between roles; a role that does not mention an action
/// simply contributes nothing.
pub fn is_allowed<R: Borrow<Role>>(roles: &[R], resource: &Resource, action: &str) -> bool {
    let allowed = roles
        .iter()
        .any(|role| role_allows(role.borrow(), resource, action));
    tracing::trace!(%resource, action, allowed, "evaluated rbac action");
    allowed
}

pub fn is_action_allowed<A: ResourceAction, R: Borrow<Role>>(
    roles: &[R],
    resource: &Resource,
    action: A,
) -> bool {
    is_allowed(roles, resource, action.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionSet, Permission, ResourceKind, TopicAction, group_resource, topic_resource};

    fn topic_role(name: &str, topic: &str, actions: &[&str]) -> Role {
        Role::new(
            name,
            vec![
                Permission::new(ResourceKind::Topic, topic)
                    .with_allowed(ActionSet::from_iter(actions.iter().copied())),
            ],
        )
    }

    #[test]
    fn union_of_roles() {
        let a = topic_role("a", "*", &["viewMessages"]);
        let b = topic_role("b", "*", &["seeTopic"]);
        let orders = topic_resource("orders");

        assert!(is_allowed(&[a.clone()], &orders, "viewMessages"));
        assert!(!is_allowed(&[b.clone()], &orders, "viewMessages"));
        assert!(is_allowed(&[a, b], &orders, "viewMessages"));
    }

    #[test]
    fn exclusion_in_one_role_does_not_cancel_another() {
        let restricted = Role::new(
            "restricted",
            vec![
                Permission::new(ResourceKind::Topic, "*")
                    .with_allowed(ActionSet::all())
                    .with_excludes(ActionSet::from_iter(["viewMessages"])),
            ],
        );
        let reader = topic_role("reader", "orders", &["viewMessages"]);
        let orders = topic_resource("orders");

        assert!(!is_allowed(&[&restricted], &orders, "viewMessages"));
        assert!(is_allowed(&[&restricted, &reader], &orders, "viewMessages"));
    }

    #[test]
    fn include_overrides_exclude() {
        let role = Role::new(
            "override",
            vec![
                Permission::new(ResourceKind::Topic, "*")
                    .with_allowed(ActionSet::all())
                    .with_excludes(ActionSet::from_iter(["viewMessages"]))
                    .with_includes(ActionSet::from_iter(["viewMessages"])),
            ],
        );
        assert!(is_action_allowed(
            &[role],
            &topic_resource("orders"),
            TopicAction::ViewMessages
        ));
    }

    #[test]
    fn resource_kind_is_respected() {
        let role = topic_role("topics", "*", &["*"]);
        assert!(!is_allowed(&[role], &group_resource("orders"), "seeConsumerGroup"));
    }

    #[test]
    fn no_roles_allow_nothing() {
        let roles: [Role; 0] = [];
        assert!(!is_allowed(&roles, &topic_resource("orders"), "seeTopic"));
    }
}
