//! Routes for the session state store.

use axum::extract::{Path, State};
use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use visceraverse_core::error::DomainError;
use visceraverse_core::scenario::Evidence;
use visceraverse_session::{SessionView, Tool};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /tool.
#[derive(Debug, Deserialize)]
pub struct SelectToolRequest {
    /// The tool to select (toggles off when already active).
    pub tool: Tool,
}

/// Response body for POST /tool.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectToolResponse {
    /// The tool active after the toggle, if any.
    pub active_tool: Option<Tool>,
}

/// GET /
#[instrument(skip(state))]
async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.lock().await.view())
}

/// POST /clear
///
/// Clearing the session also unloads the scene, so decals and evidence
/// links from the cleared scenario never outlive it.
#[instrument(skip(state))]
async fn clear_session(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.clear();
    state.scene.lock().await.unload();
    info!("session cleared");
    Json(session.view())
}

/// POST /tool
#[instrument(skip(state, request))]
async fn select_tool(
    State(state): State<AppState>,
    Json(request): Json<SelectToolRequest>,
) -> Json<SelectToolResponse> {
    let mut session = state.session.lock().await;
    session.set_active_tool(request.tool);
    Json(SelectToolResponse {
        active_tool: session.active_tool(),
    })
}

/// GET /evidence/{id}
///
/// Evidence detail for the info panel, with the discovery flag merged in.
#[instrument(skip(state))]
async fn get_evidence(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Evidence>, ApiError> {
    let session = state.session.lock().await;
    let evidence = session
        .view()
        .scenario
        .and_then(|scenario| scenario.evidence.into_iter().find(|item| item.id == id))
        .ok_or_else(|| DomainError::Lookup(format!("unknown evidence id: {id}")))?;
    Ok(Json(evidence))
}

/// DELETE /tags/{id}
#[instrument(skip(state))]
async fn remove_tag(State(state): State<AppState>, Path(id): Path<String>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.remove_tag(&id);
    Json(session.view())
}

/// Returns the router for the session store.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/clear", post(clear_session))
        .route("/tool", post(select_tool))
        .route("/evidence/{id}", get(get_evidence))
        .route("/tags/{id}", delete(remove_tag))
}
