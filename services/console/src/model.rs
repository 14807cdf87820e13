//! Cluster metadata records and their RBAC-annotated views.
//!
//! # Purpose
//! The metadata collaborator supplies topic and consumer-group records; the
//! console merges the caller's projected actions into them right before they
//! are serialized.
//!
//! # Notes
//! Base records are never mutated. Annotation builds a view that flattens the
//! base record next to its `allowedActions`.
use owl_authz::{GroupAction, Role, TopicAction, group_actions, topic_actions};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    pub topic_name: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub partition_count: u32,
    #[serde(default)]
    pub replication_factor: u32,
    #[serde(default = "unknown_cleanup_policy")]
    pub cleanup_policy: String,
    /// Bytes on disk across all log dirs; `-1` when unknown.
    #[serde(default = "unknown_size")]
    pub log_dir_size: i64,
}

fn unknown_cleanup_policy() -> String {
    "N/A".to_string()
}

fn unknown_size() -> i64 {
    -1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetailView {
    #[serde(flatten)]
    pub topic: TopicDetail,
    pub allowed_actions: Vec<TopicAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberDescription {
    pub id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescription {
    pub group_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub protocol_type: String,
    #[serde(default)]
    pub members: Vec<GroupMemberDescription>,
    #[serde(default)]
    pub coordinator_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescriptionView {
    #[serde(flatten)]
    pub group: GroupDescription,
    pub allowed_actions: Vec<GroupAction>,
}

/// Annotate topics with the caller's actions, sorted by topic name.
pub fn annotate_topics<R: Borrow<Role>>(topics: &[TopicDetail], roles: &[R]) -> Vec<TopicDetailView> {
    let mut views: Vec<TopicDetailView> = topics
        .iter()
        .map(|topic| TopicDetailView {
            allowed_actions: topic_actions(&topic.topic_name, roles),
            topic: topic.clone(),
        })
        .collect();
    views.sort_by(|a, b| a.topic.topic_name.cmp(&b.topic.topic_name));
    views
}

pub fn annotate_groups<R: Borrow<Role>>(
    groups: &[GroupDescription],
    roles: &[R],
) -> Vec<GroupDescriptionView> {
    groups
        .iter()
        .map(|group| GroupDescriptionView {
            allowed_actions: group_actions(&group.group_id, roles),
            group: group.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use owl_authz::{ActionSet, Permission, ResourceKind};

    fn topic(name: &str) -> TopicDetail {
        TopicDetail {
            topic_name: name.to_string(),
            is_internal: false,
            partition_count: 3,
            replication_factor: 1,
            cleanup_policy: "delete".to_string(),
            log_dir_size: 1024,
        }
    }

    #[test]
    fn topics_are_sorted_and_annotated() {
        let role = Role::new(
            "orders",
            vec![
                Permission::new(ResourceKind::Topic, "orders")
                    .with_allowed(ActionSet::from_iter(["seeTopic"])),
            ],
        );
        let views = annotate_topics(&[topic("payments"), topic("orders")], &[role]);

        assert_eq!(views[0].topic.topic_name, "orders");
        assert_eq!(views[0].allowed_actions, vec![TopicAction::SeeTopic]);
        assert_eq!(views[1].topic.topic_name, "payments");
        assert!(views[1].allowed_actions.is_empty());
    }

    #[test]
    fn topic_view_serializes_flat() {
        let view = TopicDetailView {
            topic: topic("orders"),
            allowed_actions: vec![TopicAction::SeeTopic],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["topicName"], "orders");
        assert_eq!(json["allowedActions"][0], "seeTopic");
    }

    #[test]
    fn topic_defaults_mark_unknown_values() {
        let parsed: TopicDetail = serde_json::from_str(r#"{"topicName":"orders"}"#).unwrap();
        assert_eq!(parsed.cleanup_policy, "N/A");
        assert_eq!(parsed.log_dir_size, -1);
    }

    #[test]
    fn groups_keep_input_order() {
        let role = Role::new(
            "groups",
            vec![Permission::new(ResourceKind::ConsumerGroup, "*").with_allowed(ActionSet::all())],
        );
        let groups = vec![
            GroupDescription {
                group_id: "zeta".to_string(),
                state: "Stable".to_string(),
                protocol_type: "consumer".to_string(),
                members: Vec::new(),
                coordinator_id: 1,
            },
            GroupDescription {
                group_id: "alpha".to_string(),
                state: "Empty".to_string(),
                protocol_type: "consumer".to_string(),
                members: Vec::new(),
                coordinator_id: 2,
            },
        ];
        let views = annotate_groups(&groups, &[role]);
        assert_eq!(views[0].group.group_id, "zeta");
        assert_eq!(views[1].allowed_actions, vec![GroupAction::SeeConsumerGroup]);
    }
}
