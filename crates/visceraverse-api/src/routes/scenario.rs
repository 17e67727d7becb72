//! Routes for the scenario action boundary.
//!
//! Every route here answers `200` with a uniform `{success, data?, error?}`
//! envelope: raw failures never cross this boundary, and there are no
//! automatic retries — retry is the user pressing "generate" again.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Serialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

use visceraverse_generation::flows::{
    CustomizeScenarioInput, GenerateScenarioInput, SummarizeFindingsInput,
};

use crate::state::AppState;

/// Uniform result envelope for action-boundary calls.
#[derive(Debug, Serialize)]
pub struct ActionResult<T> {
    /// Whether the action succeeded.
    pub success: bool,
    /// The payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// A user-safe message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// POST /generate
///
/// Runs a generation request and, on success, installs the scenario into
/// the session store and rebuilds the scene. On failure the store is left
/// unchanged: the previous scenario, if any, persists. The loading flag is
/// the only synchronization signal; concurrent requests are independent
/// and the last to resolve wins.
#[instrument(skip(state, input))]
async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateScenarioInput>,
) -> Json<ActionResult<visceraverse_session::SessionView>> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, query = ?input.query(), "handling generate request");

    state.session.lock().await.set_loading(true);

    // The session lock is not held across the backend call.
    let result = state.generator.generate(&input).await;

    let mut session = state.session.lock().await;
    session.set_loading(false);

    match result {
        Ok(scenario) => {
            state.scene.lock().await.load_scenario(&scenario);
            session.set_scenario(scenario);
            info!(%correlation_id, "scenario installed");
            Json(ActionResult::ok(session.view()))
        }
        Err(err) => {
            error!(%correlation_id, %err, "scenario generation failed");
            Json(ActionResult::err(format!(
                "Failed to generate a new scenario. Please try again. Details: {err}"
            )))
        }
    }
}

/// POST /customize
#[instrument(skip(state, input))]
async fn customize(
    State(state): State<AppState>,
    Json(input): Json<CustomizeScenarioInput>,
) -> Json<ActionResult<visceraverse_generation::flows::ScenarioDescription>> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling customize request");

    match state.generator.customize(&input).await {
        Ok(description) => Json(ActionResult::ok(description)),
        Err(err) => {
            error!(%correlation_id, %err, "scenario customization failed");
            Json(ActionResult::err(format!(
                "Failed to customize the scenario. Please try again. Details: {err}"
            )))
        }
    }
}

/// POST /summarize
#[instrument(skip(state, input))]
async fn summarize(
    State(state): State<AppState>,
    Json(input): Json<SummarizeFindingsInput>,
) -> Json<ActionResult<visceraverse_generation::flows::FindingsSummary>> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling summarize request");

    match state.generator.summarize(&input).await {
        Ok(summary) => Json(ActionResult::ok(summary)),
        Err(err) => {
            error!(%correlation_id, %err, "findings summarization failed");
            Json(ActionResult::err(format!(
                "Failed to summarize the findings. Please try again. Details: {err}"
            )))
        }
    }
}

/// Returns the router for the scenario action boundary.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate))
        .route("/customize", post(customize))
        .route("/summarize", post(summarize))
}
