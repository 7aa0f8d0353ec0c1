use claims::assert_ok;

use crate::helpers::{
    assert_is_json_error, assert_json_response, sample_story_payload, spawn_api,
};

#[tokio::test]
async fn create_returns_201_and_echoes_the_story() {
    // Arrange
    let api = spawn_api().await;
    let payload = sample_story_payload();

    // Act
    let response = api
        .client
        .post_create(&payload)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(201, response.status().as_u16());
    let body = assert_json_response(response).await;
    assert!(!body["storyId"].as_str().unwrap().is_empty());
    assert_eq!(payload["title"], body["title"]);
    assert_eq!(payload["description"], body["description"]);
    assert_eq!(payload["url"], body["url"]);
    assert_eq!("Successfully created!", body["message"]);
}

#[tokio::test]
async fn create_without_required_fields_returns_400() {
    // Arrange
    let api = spawn_api().await;
    let payload = serde_json::json!({
        "title": "A title with nothing else",
    });

    // Act
    let response = api
        .client
        .post_create(&payload)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_is_json_error(&response, 400);
    let error_body = assert_json_response(response).await;
    assert!(!error_body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_with_blank_fields_does_not_store_a_story() {
    // Arrange
    let api = spawn_api().await;
    let payload = serde_json::json!({
        "title": " ",
        "description": "",
        "url": "",
    });

    // Act
    let response = api
        .client
        .post_create(&payload)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_is_json_error(&response, 400);
    let stories = assert_ok!(api.client.all_stories().await);
    assert!(stories.is_empty());
}
