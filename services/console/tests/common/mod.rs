use console::app::{AppState, build_router};
use console::observability::install_metrics_recorder;
use console::store::memory::{InMemoryStore, parse_snapshot};
use owl_authz::{FilterOptions, UnknownFilterPolicy};
use std::sync::Arc;

pub const USER_HEADER: &str = "x-owl-user";

pub const SNAPSHOT: &str = r#"
roles:
  - name: viewer
    permissions:
      - resourceName: "*"
        resourceId: 2
        allowedActions: [seeTopic, viewConfig]
      - resourceName: "*"
        resourceId: 3
        allowedActions: [seeConsumerGroup]
  - name: orders-team
    permissions:
      - resourceName: "orders-*"
        resourceId: 2
        allowedActions: [all]
        excludes: [useSearchFilter]
  - name: admin
    permissions:
      - resourceName: "*"
        resourceId: 1
        allowedActions: ["*"]
roleBindings:
  - ephemeralId: B1
    roleName: viewer
  - ephemeralId: B2
    roleName: orders-team
  - ephemeralId: B3
    roleName: admin
  - ephemeralId: B4
    roleName: deleted-role
users:
  - internalIdentifier: viewer-only
    bindingIds: [B1]
  - internalIdentifier: orders-dev
    bindingIds: [B2, B1, B4]
  - internalIdentifier: root
    bindingIds: [B3, B1]
aclResources:
  - resourceType: Topic
    resourceName: orders-
    resourcePatternType: Prefixed
    acls:
      - principal: "User:orders-app"
        host: "*"
        operation: Write
        permissionType: Allow
  - resourceType: Topic
    resourceName: payments
    resourcePatternType: Literal
    acls:
      - principal: "User:payments-app"
        host: "*"
        operation: Read
        permissionType: Allow
      - principal: "User:intern"
        host: "*"
        operation: All
        permissionType: Deny
topics:
  - topicName: payments
    partitionCount: 3
    replicationFactor: 3
    cleanupPolicy: delete
  - topicName: orders-eu
    partitionCount: 12
    replicationFactor: 3
    cleanupPolicy: compact
consumerGroups:
  - groupId: billing
    state: Stable
    protocolType: consumer
    coordinatorId: 1
    members:
      - id: billing-1
        clientId: billing
        clientHost: /10.0.0.4
"#;

pub fn app_with_policy(
    unknown: UnknownFilterPolicy,
) -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    let snapshot = parse_snapshot(SNAPSHOT).expect("snapshot");
    let state = AppState {
        store: Arc::new(InMemoryStore::new(snapshot)),
        filter_options: FilterOptions { unknown },
        user_header: USER_HEADER.to_string(),
        metrics: install_metrics_recorder(),
    };
    build_router(state).into_service()
}

pub fn app() -> axum::routing::RouterIntoService<axum::body::Body, ()> {
    app_with_policy(UnknownFilterPolicy::MatchNone)
}

pub fn get(uri: &str, user: Option<&str>) -> axum::http::Request<axum::body::Body> {
    let mut builder = axum::http::Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_HEADER, user);
    }
    builder.body(axum::body::Body::empty()).expect("request")
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}
