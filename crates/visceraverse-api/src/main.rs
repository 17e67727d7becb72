//! VisceraVerse API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use visceraverse_api::{routes, state::AppState};
use visceraverse_core::clock::SystemClock;
use visceraverse_generation::llm::{HttpLlmClient, LlmConfig};
use visceraverse_generation::service::{
    LlmScenarioGenerator, PredefinedScenarioGenerator, ScenarioGenerator,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting VisceraVerse API server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;
    let generation_mode =
        std::env::var("GENERATION_MODE").unwrap_or_else(|_| "llm".to_string());

    // Build the generation service.
    let generator: Arc<dyn ScenarioGenerator> = match generation_mode.as_str() {
        "llm" => {
            let defaults = LlmConfig::default();
            let config = LlmConfig {
                endpoint: std::env::var("LLM_ENDPOINT").unwrap_or(defaults.endpoint),
                model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
                api_key: std::env::var("LLM_API_KEY").ok(),
                timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                    .ok()
                    .map(|v| v.parse())
                    .transpose()
                    .map_err(|e| format!("LLM_TIMEOUT_SECS must be a valid u64: {e}"))?
                    .unwrap_or(defaults.timeout_secs),
            };
            tracing::info!(endpoint = %config.endpoint, model = %config.model, "Using generative backend");
            let client = HttpLlmClient::new(config)?;
            Arc::new(LlmScenarioGenerator::new(Arc::new(client)))
        }
        "predefined" => {
            tracing::info!("Using predefined scenario generator");
            Arc::new(PredefinedScenarioGenerator)
        }
        other => {
            return Err(format!("GENERATION_MODE must be 'llm' or 'predefined', got '{other}'").into());
        }
    };

    // Build application state.
    let app_state = AppState::new(generator, Arc::new(SystemClock));

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/scenario", routes::scenario::router())
        .nest("/api/v1/session", routes::session::router())
        .nest("/api/v1/scene", routes::scene::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
