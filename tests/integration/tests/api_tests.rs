//! Group API Integration Tests
//!
//! Drive the client over real HTTP against a local mock server.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use integration_tests::{fixtures::*, TestApi};
use rbx_client::ClientError;
use rbx_core::{FetchError, Group, GroupId, RoleId, User, UserId};
use serde_json::json;

fn ids(groups: &[Group]) -> Vec<i64> {
    groups.iter().map(|g| g.id().into_inner()).collect()
}

// ============================================================================
// Group Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_group_with_roles() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_group(7, group_document("Builders", Some((1, "alice"))))
        .await;
    api.mount_roles(7, default_roles()).await;

    let group = api.client.group(GroupId::new(7)).await.unwrap();

    assert_eq!(group.id(), GroupId::new(7));
    assert_eq!(group.name(), "Builders");
    assert_eq!(group.description(), "The Builders group");
    assert_eq!(group.emblem_url(), "https://images.test/builders.png");
    assert!(group.is_owned_by(UserId::new(1)));
    assert_eq!(group.owner().and_then(User::username), Some("alice"));

    let ranks: Vec<i32> = group.roles().iter().map(|r| r.rank()).collect();
    assert_eq!(ranks, [0, 1, 255]);
    assert_eq!(group.roles()[2].id(), RoleId::new(102));
    assert_eq!(group.to_string(), "Group (7): Builders");
}

#[tokio::test]
async fn test_fetch_unowned_group() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_group(8, group_document("Abandoned", None)).await;
    api.mount_roles(8, role_sets(&[])).await;

    let group = api.client.group(GroupId::new(8)).await.unwrap();

    assert!(group.owner().is_none());
    assert!(group.roles().is_empty());
}

#[tokio::test]
async fn test_null_description_reads_as_empty() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    let mut document = group_document("Quiet", None);
    document["Description"] = serde_json::Value::Null;
    api.mount_group(12, document).await;
    api.mount_roles(12, default_roles()).await;

    let group = api.client.group(GroupId::new(12)).await.unwrap();

    assert_eq!(group.name(), "Quiet");
    assert!(group.description().is_empty());
}

#[tokio::test]
async fn test_missing_group_is_fetch_failure() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_status("/groups/404", 404).await;

    let err = api.client.group(GroupId::new(404)).await.unwrap_err();

    assert!(err.is_fetch_failure());
    assert_eq!(err.code(), "FETCH_FAILED");
    // Role sets are never requested once the metadata lookup failed
    assert_eq!(api.requested_paths().await, ["/groups/404"]);
}

#[tokio::test]
async fn test_role_sets_failure_fails_lookup() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_group(9, group_document("Half", None)).await;
    api.mount_status("/groups/9/RoleSets/", 500).await;

    let err = api.client.group(GroupId::new(9)).await.unwrap_err();

    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_metadata_missing_field_is_schema_violation() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_group(10, json!({ "Name": "NoDescription", "Owner": null, "EmblemUrl": "" }))
        .await;
    api.mount_roles(10, default_roles()).await;

    let err = api.client.group(GroupId::new(10)).await.unwrap_err();

    assert!(err.is_schema_violation());
    assert_eq!(err.code(), "MISSING_FIELD");
}

#[tokio::test]
async fn test_non_json_body_is_schema_violation() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_raw("/groups/11", "<html>maintenance</html>").await;

    let err = api.client.group(GroupId::new(11)).await.unwrap_err();

    assert_eq!(err.code(), "INVALID_JSON");
}

// ============================================================================
// Relation Listing Tests
// ============================================================================

#[tokio::test]
async fn test_allies_across_three_pages() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_relation_page(1, "allies", 1, relation_page(false, &[10, 11]))
        .await;
    api.mount_relation_page(1, "allies", 2, relation_page(false, &[20]))
        .await;
    api.mount_relation_page(1, "allies", 3, relation_page(true, &[30]))
        .await;

    let collected = api
        .client
        .allies(&Group::from_id(GroupId::new(1)))
        .await
        .unwrap();

    assert_eq!(ids(&collected.items), [10, 11, 20, 30]);
    assert_eq!(collected.pages_fetched, 3);
    assert!(!collected.truncated);
    assert!(collected.items[0].is_owned_by(UserId::new(100)));
    // Each mounted page expects exactly one request; verified on drop
}

#[tokio::test]
async fn test_enemies_single_empty_page() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_relation_page(2, "enemies", 1, relation_page(true, &[]))
        .await;

    let collected = api
        .client
        .enemies(&Group::from_id(GroupId::new(2)))
        .await
        .unwrap();

    assert!(collected.items.is_empty());
    assert_eq!(collected.pages_fetched, 1);
}

#[tokio::test]
async fn test_failed_page_fails_listing() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_relation_page(3, "allies", 1, relation_page(false, &[1]))
        .await;
    api.mount_status("/groups/3/allies", 503).await;

    let err = api
        .client
        .allies(&Group::from_id(GroupId::new(3)))
        .await
        .unwrap_err();

    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_slow_page_times_out_listing() {
    let api = TestApi::start_with_timeout(1)
        .await
        .expect("Failed to start mock API");
    api.mount_relation_page(4, "allies", 1, relation_page(false, &[1, 2]))
        .await;
    api.mount_slow_relation_page(
        4,
        "allies",
        2,
        Duration::from_secs(3),
        relation_page(true, &[3]),
    )
    .await;

    let result = api.client.allies(&Group::from_id(GroupId::new(4))).await;

    let err = result.expect_err("Timed out listing must not return partial items");
    assert!(err.is_fetch_failure());
    assert!(matches!(
        err,
        ClientError::Fetch(FetchError::Timeout { ref url }) if url.ends_with("/groups/4/allies?page=2")
    ));
}

// ============================================================================
// Membership Tests
// ============================================================================

#[tokio::test]
async fn test_role_of_member() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_memberships(
        261,
        memberships(vec![
            membership(5, ("Member", 1, 51)),
            membership(7, ("Admin", 254, 71)),
        ]),
    )
    .await;

    let user = User::new(UserId::new(261));
    let group = Group::from_id(GroupId::new(7));

    let role = api.client.role_of(&user, &group).await.unwrap().unwrap();
    assert_eq!(role.name(), "Admin");
    assert_eq!(role.rank(), 254);
    assert_eq!(role.id(), RoleId::new(71));

    assert!(api.client.is_member(&user, &group).await.unwrap());
    assert!(!api
        .client
        .is_member(&user, &Group::from_id(GroupId::new(99)))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_user_without_groups() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_memberships(1, memberships(vec![])).await;

    let user = User::new(UserId::new(1));
    let group = Group::from_id(GroupId::new(7));

    assert!(api.client.role_of(&user, &group).await.unwrap().is_none());
    assert!(api.client.user_memberships(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_memberships_lists_every_group() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_memberships(
        2,
        memberships(vec![
            membership(5, ("Member", 1, 51)),
            membership(6, ("Owner", 255, 61)),
        ]),
    )
    .await;

    let listed = api
        .client
        .user_memberships(&User::new(UserId::new(2)))
        .await
        .unwrap();

    let groups: Vec<i64> = listed.iter().map(|m| m.group_id.into_inner()).collect();
    assert_eq!(groups, [5, 6]);
    assert_eq!(listed[1].role.rank(), 255);
}

#[tokio::test]
async fn test_membership_without_data_is_schema_violation() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_memberships(3, json!({ "errors": [] })).await;

    let err = api
        .client
        .is_member(&User::new(UserId::new(3)), &Group::from_id(GroupId::new(7)))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "MISSING_DATA");
}

#[tokio::test]
async fn test_membership_role_missing_rank_is_schema_violation() {
    let api = TestApi::start().await.expect("Failed to start mock API");
    api.mount_memberships(
        4,
        json!({ "data": [{ "group": { "id": 7 }, "role": { "id": 1, "name": "X" } }] }),
    )
    .await;

    let err = api
        .client
        .role_of(&User::new(UserId::new(4)), &Group::from_id(GroupId::new(7)))
        .await
        .unwrap_err();

    assert!(err.is_schema_violation());
    assert_eq!(err.code(), "MISSING_FIELD");
}
