mod common;

use chrono::Utc;
use shared::models::ItemCreate;
use trackr_client::ClientError;

async fn seed_item(server: &common::TestServer) -> String {
    server
        .client
        .create_item(&ItemCreate {
            title: "title".to_string(),
            body: "body".to_string(),
            tags: vec![],
        })
        .await
        .unwrap()
        .body
        .id
}

#[tokio::test]
async fn add_then_list_includes_comment_with_server_timestamp() {
    let server = common::spawn_server().await;
    let item_id = seed_item(&server).await;

    let before = Utc::now();
    let created = server
        .client
        .add_comment(&item_id, "comment body")
        .await
        .unwrap();
    let after = Utc::now();

    let location = created.location.expect("Location header");
    assert_eq!(
        location,
        format!("/api/items/{item_id}/comments/{}", created.body.id)
    );
    assert_eq!(created.body.id.len(), 24);

    let comments = server.client.list_comments(&item_id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "comment body");
    assert_eq!(comments[0].item_id, item_id);
    assert!(comments[0].timestamp >= before && comments[0].timestamp <= after);
}

#[tokio::test]
async fn get_single_comment_round_trips() {
    let server = common::spawn_server().await;
    let item_id = seed_item(&server).await;

    let created = server
        .client
        .add_comment(&item_id, "comment body")
        .await
        .unwrap()
        .body;

    let fetched = server
        .client
        .get_comment(&item_id, &created.id)
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn comments_are_listed_oldest_first() {
    let server = common::spawn_server().await;
    let item_id = seed_item(&server).await;

    server.client.add_comment(&item_id, "one").await.unwrap();
    server.client.add_comment(&item_id, "two").await.unwrap();

    let comments = server.client.list_comments(&item_id).await.unwrap();
    let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["one", "two"]);
}

#[tokio::test]
async fn item_without_comments_lists_empty() {
    let server = common::spawn_server().await;
    let item_id = seed_item(&server).await;

    let comments = server.client.list_comments(&item_id).await.unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn comment_on_unknown_item_is_not_found() {
    let server = common::spawn_server().await;

    let err = server
        .client
        .add_comment("518e5b6d96661c4008000002", "comment body")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn comment_under_the_wrong_item_is_not_found() {
    let server = common::spawn_server().await;
    let first = seed_item(&server).await;
    let second = seed_item(&server).await;

    let created = server
        .client
        .add_comment(&first, "comment body")
        .await
        .unwrap()
        .body;

    let err = server
        .client
        .get_comment(&second, &created.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn empty_comment_body_is_rejected() {
    let server = common::spawn_server().await;
    let item_id = seed_item(&server).await;

    let err = server.client.add_comment(&item_id, "").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}
