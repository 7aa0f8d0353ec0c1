use std::net::TcpListener;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use tower_http::trace::TraceLayer;

use crate::configuration::Settings;

use super::routes::{
    all_stories, authenticate, create_story, delete_story, edit_story, health_check,
    require_bearer,
};
use super::state::{StubCredentials, StubState};

pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self, configuration: Settings) -> Result<(), std::io::Error> {
        let state = StubState::new(StubCredentials {
            username: configuration.credentials.username,
            password: configuration.credentials.password,
        });
        let app = router(state);

        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, app).await?;
        Ok(())
    }
}

fn router(state: StubState) -> Router {
    let story_routes = Router::new()
        .route("/Create", post(create_story))
        .route("/Edit/{id}", put(edit_story))
        .route("/All", get(all_stories))
        .route("/Delete/{id}", delete(delete_story))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/health_check", get(health_check))
        .route("/api/User/Authentication", post(authenticate))
        .nest("/api/Story", story_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
