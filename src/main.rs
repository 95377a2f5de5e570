// src/main.rs

use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use persona_chat::config::CONFIG;
use persona_chat::llm::CompletionClient;
use persona_chat::persona::PersonaRegistry;
use persona_chat::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = Level::from_str(&CONFIG.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting persona chat backend");
    info!("Model: {}", CONFIG.model);
    info!("Environment: {}", CONFIG.app_env);

    if !CONFIG.has_api_key() {
        if CONFIG.is_production() {
            // Serverless cold starts must not die here; chat requests
            // will fail with InvalidCredential until the key is set.
            error!("OPENAI_API_KEY is not set; chat requests will fail until it is configured");
        } else {
            anyhow::bail!("OPENAI_API_KEY environment variable is required");
        }
    }

    let registry = PersonaRegistry::builtin();
    info!(
        "Available personas: {}",
        registry
            .list()
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let completion = CompletionClient::from_config(&CONFIG)?;
    let app_state = Arc::new(AppState::new(registry, completion));

    let app = persona_chat::api::http::router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
