//! Routes for the scene interaction model.
//!
//! A thin client forwards pointer gestures here; the controller performs
//! the ray casting and turns gestures into session-store mutations.

use axum::extract::State;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use visceraverse_core::organ::Organ;
use visceraverse_scene::{InjuryDecal, TagAnchor};
use visceraverse_session::SessionView;

use crate::state::AppState;

/// Pointer position in viewport pixels.
#[derive(Debug, Deserialize)]
pub struct PointerRequest {
    /// Screen x in pixels.
    pub x: f32,
    /// Screen y in pixels.
    pub y: f32,
}

/// Request body for POST /resize.
#[derive(Debug, Deserialize)]
pub struct ResizeRequest {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

/// Renderable view of one hit-target.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetView {
    /// The organ this target represents.
    pub organ: Organ,
    /// The organ's display name.
    pub name: String,
    /// Current translation offset.
    pub position: [f32; 3],
    /// Whether the pointer currently highlights this target.
    pub highlighted: bool,
}

/// Renderable view of the whole scene.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneView {
    /// All hit-targets.
    pub targets: Vec<TargetView>,
    /// Resolved injury decals.
    pub decals: Vec<InjuryDecal>,
    /// Whether a drag is in progress.
    pub dragging: bool,
}

/// GET /
#[instrument(skip(state))]
async fn get_scene(State(state): State<AppState>) -> Json<SceneView> {
    let scene = state.scene.lock().await;
    let highlighted = scene.highlighted().map(visceraverse_scene::HitTarget::organ);
    let targets = scene
        .targets()
        .iter()
        .map(|target| TargetView {
            organ: target.organ(),
            name: target.organ().name().to_owned(),
            position: target.position().to_array(),
            highlighted: highlighted == Some(target.organ()),
        })
        .collect();
    Json(SceneView {
        targets,
        decals: scene.decals().to_vec(),
        dragging: scene.is_dragging(),
    })
}

/// POST /pointer-move
#[instrument(skip(state, request))]
async fn pointer_move(
    State(state): State<AppState>,
    Json(request): Json<PointerRequest>,
) -> Json<SceneView> {
    {
        let mut scene = state.scene.lock().await;
        scene.pointer_move(request.x, request.y);
    }
    get_scene(State(state)).await
}

/// POST /pointer-down
#[instrument(skip(state))]
async fn pointer_down(State(state): State<AppState>) -> Json<SessionView> {
    // Lock order is session before scene, everywhere.
    let mut session = state.session.lock().await;
    let mut scene = state.scene.lock().await;
    scene.pointer_down(&mut session);
    Json(session.view())
}

/// POST /pointer-up
#[instrument(skip(state))]
async fn pointer_up(State(state): State<AppState>) -> Json<SceneView> {
    {
        let mut scene = state.scene.lock().await;
        scene.pointer_up();
    }
    get_scene(State(state)).await
}

/// POST /double-click
#[instrument(skip(state))]
async fn double_click(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    let mut scene = state.scene.lock().await;
    scene.double_click(&mut session, state.clock.as_ref());
    Json(session.view())
}

/// POST /resize
#[instrument(skip(state, request))]
async fn resize(
    State(state): State<AppState>,
    Json(request): Json<ResizeRequest>,
) -> Json<SceneView> {
    {
        let mut scene = state.scene.lock().await;
        scene.resize(request.width, request.height);
    }
    get_scene(State(state)).await
}

/// GET /tags — screen-space anchors for every live tag, projected through
/// the current camera.
#[instrument(skip(state))]
async fn tag_anchors(State(state): State<AppState>) -> Json<Vec<TagAnchor>> {
    let session = state.session.lock().await;
    let scene = state.scene.lock().await;
    Json(scene.tag_anchors(&session))
}

/// Returns the router for the scene.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_scene))
        .route("/pointer-move", post(pointer_move))
        .route("/pointer-down", post(pointer_down))
        .route("/pointer-up", post(pointer_up))
        .route("/double-click", post(double_click))
        .route("/resize", post(resize))
        .route("/tags", get(tag_anchors))
}
