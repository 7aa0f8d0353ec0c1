pub mod configuration;
pub mod domain;
pub mod story_client;
pub mod stub;
pub mod telemetry;
