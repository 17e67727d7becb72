//! Shared application state.

use std::sync::Arc;

use tokio::sync::Mutex;
use visceraverse_core::clock::Clock;
use visceraverse_generation::service::ScenarioGenerator;
use visceraverse_scene::SceneController;
use visceraverse_session::SessionState;

/// Application state shared across all request handlers.
///
/// The session and scene are process-local, single-session state (one
/// examination at a time), guarded by async mutexes that are never held
/// across a generation call.
#[derive(Clone)]
pub struct AppState {
    /// The scenario generation service.
    pub generator: Arc<dyn ScenarioGenerator>,
    /// Time source for tag timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// The session state store.
    pub session: Arc<Mutex<SessionState>>,
    /// The scene interaction model.
    pub scene: Arc<Mutex<SceneController>>,
}

impl AppState {
    /// Create new application state with an empty session and scene.
    #[must_use]
    pub fn new(generator: Arc<dyn ScenarioGenerator>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            generator,
            clock,
            session: Arc::new(Mutex::new(SessionState::new())),
            scene: Arc::new(Mutex::new(SceneController::default())),
        }
    }
}
