//! The full story lifecycle exercised in order against one client: the
//! created story is a local value handed from step to step, not shared state.

use claims::{assert_ok, assert_some};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use storyspoiler::domain::{ImageUrl, NewStory, StoryPayload, StoryTitle};

use crate::helpers::{sample_story_payload, spawn_api};

#[tokio::test]
async fn a_story_lives_through_create_edit_list_and_delete() {
    let api = spawn_api().await;

    // Create a story and capture the server-assigned id
    let story = NewStory {
        title: StoryTitle::parse(Sentence(1..4).fake()).unwrap(),
        description: Paragraph(1..5).fake(),
        url: ImageUrl::parse("https://pictures.example.com/cover.png".into()).unwrap(),
    };
    let created = assert_ok!(api.client.create_story(&story).await);
    assert_eq!(story.title.as_ref(), created.title);
    assert_eq!(story.description, created.description);
    assert_eq!(story.url.as_ref(), created.url);

    // Edit it
    let update = StoryPayload {
        title: "Now with a twist ending".into(),
        description: Paragraph(1..5).fake(),
        url: "https://pictures.example.com/twist.png".into(),
    };
    let message = assert_ok!(api.client.edit_story(&created.story_id, &update).await);
    assert_eq!("Successfully updated!", message);

    // The edited story shows up in the listing
    let stories = assert_ok!(api.client.all_stories().await);
    let listed = assert_some!(stories.iter().find(|story| story.id == created.story_id));
    assert_eq!(update.title, listed.title);

    // Delete it
    assert_ok!(api.client.delete_story(&created.story_id).await);

    // The id is now gone: editing it reports a missing spoiler
    let response = api
        .client
        .put_edit(&created.story_id, &sample_story_payload())
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
    let body = response.text().await.expect("Failed to read the body.");
    assert!(body.contains("No spoilers"));

    // and deleting it again is refused
    let response = api
        .client
        .send_delete(&created.story_id)
        .await
        .expect("Failed to execute request.");
    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.expect("Failed to read the body.");
    assert!(body.contains("Unable to delete this story spoiler!"));
}
