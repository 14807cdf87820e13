use crate::AuthzError;
use serde::{Deserialize, Serialize};

/// Action vocabulary for one resource kind.
///
/// `DOMAIN` lists every concrete action in presentation order. The `all`
/// marker is accepted on input but never part of the domain, so projections
/// always come back as explicit action lists.
pub trait ResourceAction: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    const DOMAIN: &'static [Self];

    fn as_str(self) -> &'static str;
}

macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            #[serde(rename = "all")]
            All,
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $name::All => "all",
                    $($name::$variant => $label,)+
                }
            }

            pub fn is_all(self) -> bool {
                matches!(self, $name::All)
            }
        }

        impl ResourceAction for $name {
            const DOMAIN: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = AuthzError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    "all" => Ok($name::All),
                    $($label => Ok($name::$variant),)+
                    _ => Err(AuthzError::InvalidAction(value.to_string())),
                }
            }
        }
    };
}

action_enum! {
    /// Console actions on a single topic.
    TopicAction {
        SeeTopic => "seeTopic",
        ViewPartitions => "viewPartitions",
        ViewMessages => "viewMessages",
        UseSearchFilter => "useSearchFilter",
        ViewConsumers => "viewConsumers",
        ViewConfig => "viewConfig",
    }
}

action_enum! {
    /// Console actions on a consumer group.
    GroupAction {
        SeeConsumerGroup => "seeConsumerGroup",
    }
}

action_enum! {
    /// Console actions scoped to the whole cluster.
    ClusterAction {
        ListAcls => "listAcls",
        ManageConsole => "manageConsole",
    }
}

/// Boolean view of a topic's allowed actions, as rendered by topic pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPermissions {
    pub can_see_topic: bool,
    pub can_view_topic_partitions: bool,
    pub can_see_topic_config: bool,
    pub can_use_search_filters: bool,
    pub can_view_topic_messages: bool,
    pub can_view_topic_consumers: bool,
}

impl TopicPermissions {
    pub fn from_actions(actions: &[TopicAction]) -> Self {
        let has = |action: TopicAction| {
            actions
                .iter()
                .any(|candidate| candidate.is_all() || *candidate == action)
        };
        Self {
            can_see_topic: has(TopicAction::SeeTopic),
            can_view_topic_partitions: has(TopicAction::ViewPartitions),
            can_see_topic_config: has(TopicAction::ViewConfig),
            can_use_search_filters: has(TopicAction::UseSearchFilter),
            can_view_topic_messages: has(TopicAction::ViewMessages),
            can_view_topic_consumers: has(TopicAction::ViewConsumers),
        }
    }
}
