use serde::{Deserialize, Serialize};

use crate::domain::{ImageUrl, StoryTitle};

/// A validated story spoiler, ready to be submitted to the API.
#[derive(Debug)]
pub struct NewStory {
    pub title: StoryTitle,
    pub description: String,
    pub url: ImageUrl,
}

/// The wire shape of create/edit request bodies.
#[derive(Debug, Clone, Serialize)]
pub struct StoryPayload {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl From<&NewStory> for StoryPayload {
    fn from(story: &NewStory) -> Self {
        Self {
            title: story.title.as_ref().to_owned(),
            description: story.description.clone(),
            url: story.url.as_ref().to_owned(),
        }
    }
}

/// Response body of a successful `POST /api/Story/Create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedStory {
    pub story_id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub message: String,
}

/// A story as returned by `GET /api/Story/All`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
}
