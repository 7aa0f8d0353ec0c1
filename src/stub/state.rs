use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use secrecy::Secret;
use tokio::sync::RwLock;
use uuid::Uuid;

/// The one login the stub accepts.
#[derive(Clone)]
pub struct StubCredentials {
    pub username: String,
    pub password: Secret<String>,
}

#[derive(Clone, Debug)]
pub struct StoredStory {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Clone)]
pub struct StubState {
    pub credentials: Arc<StubCredentials>,
    pub stories: Arc<RwLock<HashMap<Uuid, StoredStory>>>,
    pub tokens: Arc<RwLock<HashSet<String>>>,
}

impl StubState {
    pub fn new(credentials: StubCredentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            stories: Arc::new(RwLock::new(HashMap::new())),
            tokens: Arc::new(RwLock::new(HashSet::new())),
        }
    }
}
