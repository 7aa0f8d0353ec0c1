// Runs the story API stub standalone so the suite (or external tooling)
// can target a long-lived local instance instead of the real deployment.
// Run with: cargo run --bin spawn_stub_server

use std::io::{self, Write};

use storyspoiler::configuration::get_configuration;
use storyspoiler::stub::Application;
use storyspoiler::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber("stub_server".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(&configuration).await?;

    // Output the bound address as JSON to stdout so callers can pick it up
    let output = serde_json::json!({
        "port": application.port(),
        "address": format!("http://127.0.0.1:{}", application.port()),
    });
    println!("{}", serde_json::to_string(&output)?);
    io::stdout().flush()?;

    #[allow(clippy::let_underscore_future)]
    let _ = tokio::spawn(application.run_until_stopped(configuration));

    // Keep the stub running until we receive a signal
    tokio::signal::ctrl_c().await?;

    Ok(())
}
