use reqwest::{Client, Method, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};

use crate::domain::{AccessToken, ApiMessage, CreatedStory, NewStory, Story, StoryPayload};

/// The username/password pair used to obtain a bearer token.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum StoryApiError {
    #[error("failed to reach the story API")]
    Transport(#[from] reqwest::Error),
    #[error("the story API returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("the response body is missing a usable `{0}` field")]
    MissingField(&'static str),
}

/// HTTP client for the story spoiler API.
///
/// All story operations require a bearer token, obtained once via
/// [`StoryClient::authenticate`] and attached to every subsequent request.
#[derive(Clone, Debug)]
pub struct StoryClient {
    base_url: String,
    http_client: Client,
    bearer_token: Option<Secret<String>>,
}

impl StoryClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            base_url,
            http_client,
            bearer_token: None,
        }
    }

    /// Attach an already-issued token instead of going through `authenticate`.
    pub fn with_token(mut self, token: Secret<String>) -> Self {
        self.bearer_token = Some(token);
        self
    }

    pub fn token(&self) -> Option<&Secret<String>> {
        self.bearer_token.as_ref()
    }

    /// Exchange credentials for a bearer token and store it on the client.
    ///
    /// A non-success status or an empty `accessToken` field is an error:
    /// nothing else can be attempted without a token.
    #[tracing::instrument(
        name = "Authenticating against the story API",
        skip(self, credentials),
        fields(username = %credentials.username)
    )]
    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<(), StoryApiError> {
        let url = format!("{}/api/User/Authentication", self.base_url);
        let body = serde_json::json!({
            "username": credentials.username,
            "password": credentials.password.expose_secret(),
        });
        let response = self.http_client.post(&url).json(&body).send().await?;
        let response = expect_status(response, StatusCode::OK).await?;
        let token: AccessToken = response.json().await?;
        if token.access_token.trim().is_empty() {
            return Err(StoryApiError::MissingField("accessToken"));
        }
        self.bearer_token = Some(Secret::new(token.access_token));
        Ok(())
    }

    #[tracing::instrument(name = "Creating a story spoiler", skip(self, story))]
    pub async fn create_story(&self, story: &NewStory) -> Result<CreatedStory, StoryApiError> {
        let response = self.post_create(&StoryPayload::from(story)).await?;
        let response = expect_status(response, StatusCode::CREATED).await?;
        let created: CreatedStory = response.json().await?;
        if created.story_id.trim().is_empty() {
            return Err(StoryApiError::MissingField("storyId"));
        }
        Ok(created)
    }

    #[tracing::instrument(name = "Editing a story spoiler", skip(self, payload))]
    pub async fn edit_story(
        &self,
        story_id: &str,
        payload: &StoryPayload,
    ) -> Result<String, StoryApiError> {
        let response = self.put_edit(story_id, payload).await?;
        let response = expect_status(response, StatusCode::OK).await?;
        let confirmation: ApiMessage = response.json().await?;
        Ok(confirmation.message)
    }

    #[tracing::instrument(name = "Listing story spoilers", skip(self))]
    pub async fn all_stories(&self) -> Result<Vec<Story>, StoryApiError> {
        let response = self.get_all().await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response.json().await?)
    }

    /// Delete a story.
    ///
    /// The delete endpoint does not guarantee a JSON body on success: a
    /// missing or unparseable body yields `None` rather than an error.
    #[tracing::instrument(name = "Deleting a story spoiler", skip(self))]
    pub async fn delete_story(&self, story_id: &str) -> Result<Option<String>, StoryApiError> {
        let response = self.send_delete(story_id).await?;
        let response = expect_status(response, StatusCode::OK).await?;
        Ok(response
            .json::<ApiMessage>()
            .await
            .ok()
            .map(|confirmation| confirmation.message))
    }

    // Raw senders. The error-path tests assert on status codes and bodies
    // directly, so these hand back the untouched `Response`.

    pub async fn post_create<Body: serde::Serialize>(
        &self,
        body: &Body,
    ) -> Result<Response, reqwest::Error> {
        self.request(Method::POST, "/api/Story/Create")
            .json(body)
            .send()
            .await
    }

    pub async fn put_edit<Body: serde::Serialize>(
        &self,
        story_id: &str,
        body: &Body,
    ) -> Result<Response, reqwest::Error> {
        self.request(Method::PUT, &format!("/api/Story/Edit/{}", story_id))
            .json(body)
            .send()
            .await
    }

    pub async fn get_all(&self) -> Result<Response, reqwest::Error> {
        self.request(Method::GET, "/api/Story/All").send().await
    }

    pub async fn send_delete(&self, story_id: &str) -> Result<Response, reqwest::Error> {
        self.request(Method::DELETE, &format!("/api/Story/Delete/{}", story_id))
            .send()
            .await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder
    }
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, StoryApiError> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Unexpected status {} from the story API: {}", status, body);
        return Err(StoryApiError::UnexpectedStatus { status, body });
    }
    Ok(response)
}
