//! Allowed-action projection for topics, consumer groups and the cluster.
//!
//! # Purpose
//! Walks a fixed action domain through the aggregator and keeps what is
//! allowed, producing the `allowedActions` lists attached to topic and group
//! records at the service boundary.
//!
//! # Key invariants
//! - Output order is domain order; output never contains the `all` marker.
//! - Pure: identical inputs give identical output.
use crate::rbac::aggregator::is_allowed;
use crate::{
    ClusterAction, GroupAction, Resource, ResourceAction, Role, TopicAction, TopicPermissions,
    cluster_resource, group_resource, topic_resource,
};
use std::borrow::Borrow;

pub fn project<A: ResourceAction, R: Borrow<Role>>(
    resource: &Resource,
    roles: &[R],
    domain: &[A],
) -> Vec<A> {
    domain
        .iter()
        .copied()
        .filter(|action| is_allowed(roles, resource, action.as_str()))
        .collect()
}

pub fn topic_actions<R: Borrow<Role>>(topic_name: &str, roles: &[R]) -> Vec<TopicAction> {
    project(&topic_resource(topic_name), roles, TopicAction::DOMAIN)
}

pub fn group_actions<R: Borrow<Role>>(group_id: &str, roles: &[R]) -> Vec<GroupAction> {
    project(&group_resource(group_id), roles, GroupAction::DOMAIN)
}

pub fn cluster_actions<R: Borrow<Role>>(roles: &[R]) -> Vec<ClusterAction> {
    project(&cluster_resource(), roles, ClusterAction::DOMAIN)
}

pub fn topic_permissions<R: Borrow<Role>>(topic_name: &str, roles: &[R]) -> TopicPermissions {
    TopicPermissions::from_actions(&topic_actions(topic_name, roles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionSet, BindingId, Permission, ResourceKind, RoleBinding, resolve_roles};

    fn viewer() -> Role {
        Role::new(
            "viewer",
            vec![
                Permission::new(ResourceKind::Topic, "*")
                    .with_allowed(ActionSet::from_iter(["seeTopic", "viewConfig"])),
            ],
        )
    }

    #[test]
    fn viewer_bound_through_one_binding() {
        let roles = vec![viewer()];
        let bindings = vec![RoleBinding::new("B1", "viewer")];
        let access = resolve_roles(&[BindingId::new("B1")], &bindings, &roles);

        let actions = topic_actions("orders", &access.role_refs());
        assert_eq!(actions, vec![TopicAction::SeeTopic, TopicAction::ViewConfig]);
        assert!(!actions.contains(&TopicAction::ViewMessages));
    }

    #[test]
    fn exclude_removes_single_action_from_full_domain() {
        let role = Role::new(
            "no-messages",
            vec![
                Permission::new(ResourceKind::Topic, "*")
                    .with_allowed(ActionSet::all())
                    .with_excludes(ActionSet::from_iter(["viewMessages"])),
            ],
        );
        let actions = topic_actions("orders", &[role]);
        assert_eq!(actions.len(), TopicAction::DOMAIN.len() - 1);
        assert!(!actions.contains(&TopicAction::ViewMessages));
    }

    #[test]
    fn projection_is_stable_across_calls() {
        let roles = vec![viewer()];
        let first = topic_actions("orders", &roles);
        let second = topic_actions("orders", &roles);
        assert_eq!(first, second);
    }

    #[test]
    fn output_follows_domain_order() {
        let role = Role::new(
            "reversed",
            vec![
                Permission::new(ResourceKind::Topic, "*")
                    .with_allowed(ActionSet::from_iter(["viewConfig", "seeTopic"])),
            ],
        );
        let domain = [TopicAction::ViewConfig, TopicAction::SeeTopic];
        assert_eq!(
            project(&topic_resource("orders"), &[&role], &domain),
            vec![TopicAction::ViewConfig, TopicAction::SeeTopic]
        );
    }

    #[test]
    fn group_and_cluster_domains() {
        let role = Role::new(
            "operator",
            vec![
                Permission::new(ResourceKind::ConsumerGroup, "billing-*")
                    .with_allowed(ActionSet::all()),
                Permission::new(ResourceKind::Cluster, "*")
                    .with_allowed(ActionSet::from_iter(["listAcls"])),
            ],
        );
        let roles = [role];
        assert_eq!(
            group_actions("billing-eu", &roles),
            vec![GroupAction::SeeConsumerGroup]
        );
        assert!(group_actions("audit", &roles).is_empty());
        assert_eq!(cluster_actions(&roles), vec![ClusterAction::ListAcls]);
    }

    #[test]
    fn topic_permissions_reflect_projection() {
        let perms = topic_permissions("orders", &[viewer()]);
        assert!(perms.can_see_topic);
        assert!(perms.can_see_topic_config);
        assert!(!perms.can_view_topic_messages);
    }
}
