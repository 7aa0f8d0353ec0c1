use claims::assert_ok;
use uuid::Uuid;

use crate::helpers::spawn_api;

#[tokio::test]
async fn deleting_an_existing_story_returns_200() {
    // Arrange
    let api = spawn_api().await;
    let created = api.create_sample_story().await;

    // Act
    let outcome = api.client.delete_story(&created.story_id).await;

    // Assert - the confirmation message is optional on this endpoint
    let message = assert_ok!(outcome);
    if let Some(message) = message {
        assert_eq!("Deleted successfully!", message);
    }
}

#[tokio::test]
async fn deleting_a_nonexistent_story_returns_400() {
    // Arrange
    let api = spawn_api().await;
    let story_id = Uuid::new_v4().to_string();

    // Act
    let response = api
        .client
        .send_delete(&story_id)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.expect("Failed to read the body.");
    assert!(body.contains("Unable to delete this story spoiler!"));
}

#[tokio::test]
async fn deleting_the_same_story_twice_returns_400() {
    // Arrange
    let api = spawn_api().await;
    let created = api.create_sample_story().await;
    assert_ok!(api.client.delete_story(&created.story_id).await);

    // Act
    let response = api
        .client
        .send_delete(&created.story_id)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.expect("Failed to read the body.");
    assert!(body.contains("Unable to delete this story spoiler!"));
}
