mod common;

use axum::http::StatusCode;
use common::{app, app_with_policy, get, read_json};
use owl_authz::UnknownFilterPolicy;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_backend() {
    let response = app().oneshot(get("/api/health", None)).await.expect("health");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn caller_identity_is_required() {
    let response = app().oneshot(get("/api/topics", None)).await.expect("topics");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["code"], "unauthenticated");

    let response = app()
        .oneshot(get("/api/topics", Some("nobody")))
        .await
        .expect("topics");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["code"], "not_found");
}

#[tokio::test]
async fn topics_are_sorted_and_annotated_for_viewer() {
    let response = app()
        .oneshot(get("/api/topics", Some("viewer-only")))
        .await
        .expect("topics");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let topics = body["topics"].as_array().expect("topics");
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0]["topicName"], "orders-eu");
    assert_eq!(topics[0]["partitionCount"], 12);
    assert_eq!(
        topics[0]["allowedActions"],
        serde_json::json!(["seeTopic", "viewConfig"])
    );
    assert_eq!(topics[1]["topicName"], "payments");
}

#[tokio::test]
async fn team_role_widens_prefixed_topics() {
    let response = app()
        .oneshot(get("/api/topics", Some("orders-dev")))
        .await
        .expect("topics");
    let body = read_json(response).await;
    assert_eq!(
        body["topics"][0]["allowedActions"],
        serde_json::json!([
            "seeTopic",
            "viewPartitions",
            "viewMessages",
            "viewConsumers",
            "viewConfig"
        ])
    );
    assert_eq!(
        body["topics"][1]["allowedActions"],
        serde_json::json!(["seeTopic", "viewConfig"])
    );
}

#[tokio::test]
async fn topic_permissions_flags() {
    let response = app()
        .oneshot(get("/api/topics/orders-eu/permissions", Some("orders-dev")))
        .await
        .expect("permissions");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["canSeeTopic"], true);
    assert_eq!(body["canViewTopicMessages"], true);
    assert_eq!(body["canUseSearchFilters"], false);

    let response = app()
        .oneshot(get("/api/topics/unlisted/permissions", Some("viewer-only")))
        .await
        .expect("permissions");
    let body = read_json(response).await;
    assert_eq!(body["canSeeTopic"], true);
    assert_eq!(body["canViewTopicPartitions"], false);
}

#[tokio::test]
async fn consumer_groups_carry_allowed_actions() {
    let response = app()
        .oneshot(get("/api/consumer-groups", Some("viewer-only")))
        .await
        .expect("groups");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let group = &body["consumerGroups"][0];
    assert_eq!(group["groupId"], "billing");
    assert_eq!(group["members"][0]["clientId"], "billing");
    assert_eq!(group["allowedActions"], serde_json::json!(["seeConsumerGroup"]));
}

#[tokio::test]
async fn current_user_reports_capabilities_and_audits() {
    let response = app()
        .oneshot(get("/api/users/me", Some("orders-dev")))
        .await
        .expect("me");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["internalIdentifier"], "orders-dev");
    assert_eq!(body["canManageConsole"], false);
    assert_eq!(body["canListAcls"], false);
    let granted = body["grantedRoles"].as_array().expect("granted roles");
    assert_eq!(granted.len(), 2);
    assert_eq!(granted[0]["role"]["name"], "orders-team");
    assert_eq!(body["audits"]["viewer"], serde_json::json!(["B1"]));
    assert_eq!(
        body["permissionAudits"],
        serde_json::json!([
            {"roleName": "orders-team", "grantedBy": "B2"},
            {"roleName": "viewer", "grantedBy": "B1"}
        ])
    );

    let response = app()
        .oneshot(get("/api/users/me", Some("root")))
        .await
        .expect("me");
    let body = read_json(response).await;
    assert_eq!(body["canManageConsole"], true);
    assert_eq!(body["canListAcls"], true);
    assert_eq!(
        body["clusterActions"],
        serde_json::json!(["listAcls", "manageConsole"])
    );
}

#[tokio::test]
async fn acl_listing_requires_list_acls() {
    let response = app()
        .oneshot(get("/api/acls", Some("viewer-only")))
        .await
        .expect("acls");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await["code"], "forbidden");
}

#[tokio::test]
async fn acl_listing_defaults_to_everything() {
    let response = app().oneshot(get("/api/acls", Some("root"))).await.expect("acls");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let resources = body["aclResources"].as_array().expect("resources");
    assert_eq!(resources.len(), 2);
    assert_eq!(resources[1]["acls"].as_array().expect("acls").len(), 2);
}

#[tokio::test]
async fn acl_listing_filters_prefixed_topics() {
    let response = app()
        .oneshot(get(
            "/api/acls?resourceType=2&resourcePatternTypeFilter=4&operation=1&permissionType=1",
            Some("root"),
        ))
        .await
        .expect("acls");
    let body = read_json(response).await;
    let resources = body["aclResources"].as_array().expect("resources");
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["resourceName"], "orders-");
}

#[tokio::test]
async fn acl_listing_filters_rules_by_permission_type() {
    let response = app()
        .oneshot(get("/api/acls?permissionType=2", Some("root")))
        .await
        .expect("acls");
    let body = read_json(response).await;
    let resources = body["aclResources"].as_array().expect("resources");
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["resourceName"], "payments");
    assert_eq!(resources[0]["acls"][0]["principal"], "User:intern");
}

#[tokio::test]
async fn acl_listing_rejects_out_of_range_codes() {
    let response = app()
        .oneshot(get("/api/acls?operation=13", Some("root")))
        .await
        .expect("acls");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["code"], "invalid_filter");
}

#[tokio::test]
async fn acl_listing_rejects_codes_beyond_i32_as_json() {
    for uri in ["/api/acls?operation=4294967296", "/api/acls?permissionType=allow"] {
        let response = app().oneshot(get(uri, Some("root"))).await.expect("acls");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["code"], "invalid_filter");
    }
}

#[tokio::test]
async fn unknown_dimension_follows_policy() {
    let response = app()
        .oneshot(get("/api/acls?resourceType=0", Some("root")))
        .await
        .expect("acls");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert!(body["aclResources"].as_array().expect("resources").is_empty());

    let response = app_with_policy(UnknownFilterPolicy::Reject)
        .oneshot(get("/api/acls?resourceType=0", Some("root")))
        .await
        .expect("acls");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["code"], "unknown_filter");
}

#[tokio::test]
async fn admin_info_is_gated_and_flags_dangling_bindings() {
    let response = app()
        .oneshot(get("/api/admin", Some("orders-dev")))
        .await
        .expect("admin");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app().oneshot(get("/api/admin", Some("root"))).await.expect("admin");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["roles"].as_array().expect("roles").len(), 3);
    let bindings = body["roleBindings"].as_array().expect("bindings");
    assert_eq!(bindings.len(), 4);
    assert_eq!(bindings[3]["ephemeralId"], "B4");
    assert!(bindings[3]["resolvedRole"].is_null());
    let users = body["users"].as_array().expect("users");
    assert_eq!(users.len(), 3);
    assert_eq!(users[1]["internalIdentifier"], "orders-dev");
    assert_eq!(users[1]["audits"]["orders-team"], serde_json::json!(["B2"]));
    assert_eq!(users[1]["audits"]["viewer"], serde_json::json!(["B1"]));
}

#[tokio::test]
async fn metrics_endpoint_renders_counters() {
    let app = app();
    let response = app
        .clone()
        .oneshot(get("/api/acls", Some("root")))
        .await
        .expect("acls");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/metrics", None)).await.expect("metrics");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(text.contains("owl_acl_queries_total"));
    assert!(text.contains("owl_rbac_resolutions_total"));
}
