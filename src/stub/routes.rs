use axum::Json;
use axum::extract::{Path, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use secrecy::ExposeSecret;
use serde_json::json;
use uuid::Uuid;

use crate::domain::Story;

use super::state::{StoredStory, StubState};

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[derive(serde::Deserialize)]
pub struct AuthenticationRequest {
    username: Option<String>,
    password: Option<String>,
}

#[tracing::instrument(name = "Issuing an access token", skip_all)]
pub async fn authenticate(
    State(state): State<StubState>,
    Json(body): Json<AuthenticationRequest>,
) -> Response {
    let username_matches = body.username.as_deref() == Some(state.credentials.username.as_str());
    let password_matches =
        body.password.as_deref() == Some(state.credentials.password.expose_secret().as_str());
    if !(username_matches && password_matches) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials!" })),
        )
            .into_response();
    }
    let token = Uuid::new_v4().to_string();
    state.tokens.write().await.insert(token.clone());
    Json(json!({ "accessToken": token })).into_response()
}

/// Rejects story requests whose bearer token was never issued by `authenticate`.
pub async fn require_bearer(
    State(state): State<StubState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    match token {
        Some(token) if state.tokens.read().await.contains(token) => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Authentication required" })),
        )
            .into_response(),
    }
}

#[derive(serde::Deserialize)]
pub struct StoryRequest {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl StoryRequest {
    // All three fields are required and must be non-blank.
    fn into_story(self) -> Option<StoredStory> {
        let title = self.title.filter(|value| !value.trim().is_empty())?;
        let description = self.description.filter(|value| !value.trim().is_empty())?;
        let url = self.url.filter(|value| !value.trim().is_empty())?;
        Some(StoredStory {
            title,
            description,
            url,
        })
    }
}

fn missing_fields() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "All fields are required!" })),
    )
        .into_response()
}

fn no_spoilers() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "No spoilers..." })),
    )
        .into_response()
}

#[tracing::instrument(name = "Storing a new story", skip_all)]
pub async fn create_story(
    State(state): State<StubState>,
    Json(body): Json<StoryRequest>,
) -> Response {
    let Some(story) = body.into_story() else {
        return missing_fields();
    };
    let id = Uuid::new_v4();
    state.stories.write().await.insert(id, story.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "storyId": id.to_string(),
            "title": story.title,
            "description": story.description,
            "url": story.url,
            "message": "Successfully created!"
        })),
    )
        .into_response()
}

#[tracing::instrument(name = "Updating a story", skip_all, fields(story_id = %id))]
pub async fn edit_story(
    State(state): State<StubState>,
    Path(id): Path<String>,
    Json(body): Json<StoryRequest>,
) -> Response {
    // Ids that are not well-formed count as nonexistent.
    let Ok(id) = Uuid::parse_str(&id) else {
        return no_spoilers();
    };
    let mut stories = state.stories.write().await;
    let Some(existing) = stories.get_mut(&id) else {
        return no_spoilers();
    };
    let Some(story) = body.into_story() else {
        return missing_fields();
    };
    *existing = story;
    Json(json!({ "message": "Successfully updated!" })).into_response()
}

#[tracing::instrument(name = "Listing stories", skip_all)]
pub async fn all_stories(State(state): State<StubState>) -> Json<Vec<Story>> {
    let stories = state.stories.read().await;
    Json(
        stories
            .iter()
            .map(|(id, story)| Story {
                id: id.to_string(),
                title: story.title.clone(),
                description: story.description.clone(),
                url: story.url.clone(),
            })
            .collect(),
    )
}

#[tracing::instrument(name = "Deleting a story", skip_all, fields(story_id = %id))]
pub async fn delete_story(State(state): State<StubState>, Path(id): Path<String>) -> Response {
    let removed = match Uuid::parse_str(&id) {
        Ok(id) => state.stories.write().await.remove(&id),
        Err(_) => None,
    };
    match removed {
        Some(_) => Json(json!({ "message": "Deleted successfully!" })).into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Unable to delete this story spoiler!" })),
        )
            .into_response(),
    }
}
