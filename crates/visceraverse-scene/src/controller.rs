//! The scene controller: pointer gestures in, store mutations out.
//!
//! Owns the camera, the hit-target set, and transient interaction state
//! (highlight, drag). Rebuilt wholesale when the scenario changes so no
//! stale targets or decals survive a swap.

use glam::Vec3;
use serde::Serialize;
use visceraverse_core::clock::Clock;
use visceraverse_core::scenario::Scenario;
use visceraverse_session::{SessionState, Tool};

use crate::camera::Camera;
use crate::decal::{InjuryDecal, resolve_decals};
use crate::raycast::{self, Hit};
use crate::target::{HitTarget, anatomy_layout};

/// Depth bump applied to a grabbed target so it renders in front while
/// dragged; removed on release.
const DRAG_LIFT: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
struct DragState {
    target: usize,
    original_z: f32,
    plane_z: f32,
}

/// A tag projected into screen space for the current camera.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAnchor {
    /// The tag id.
    pub id: String,
    /// The tag text.
    pub text: String,
    /// Screen x in pixels.
    pub x: f32,
    /// Screen y in pixels.
    pub y: f32,
}

/// Interaction model for the anatomical scene.
pub struct SceneController {
    camera: Camera,
    targets: Vec<HitTarget>,
    decals: Vec<InjuryDecal>,
    highlighted: Option<usize>,
    drag: Option<DragState>,
    pointer: (f32, f32),
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl SceneController {
    /// Creates a controller with an empty scene.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            targets: anatomy_layout(),
            decals: Vec::new(),
            highlighted: None,
            drag: None,
            pointer: (0.0, 0.0),
        }
    }

    /// The current hit-target set.
    #[must_use]
    pub fn targets(&self) -> &[HitTarget] {
        &self.targets
    }

    /// Resolved injury decals for the loaded scenario.
    #[must_use]
    pub fn decals(&self) -> &[InjuryDecal] {
        &self.decals
    }

    /// The currently highlighted target, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&HitTarget> {
        self.highlighted.map(|index| &self.targets[index])
    }

    /// Whether a target is currently being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Rebuilds the scene for a new scenario: fresh targets at their rest
    /// positions, evidence links resolved, injury decals placed, all
    /// transient interaction state dropped.
    pub fn load_scenario(&mut self, scenario: &Scenario) {
        self.targets = anatomy_layout();
        for target in &mut self.targets {
            target.link_evidence(scenario);
        }
        self.decals = resolve_decals(&scenario.injuries);
        self.highlighted = None;
        self.drag = None;
    }

    /// Returns the scene to its no-scenario form: rest-position targets
    /// with no evidence links, no decals, no transient interaction state.
    /// The camera keeps its viewport.
    pub fn unload(&mut self) {
        self.targets = anatomy_layout();
        self.decals.clear();
        self.highlighted = None;
        self.drag = None;
    }

    /// Resizes the camera viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    fn hit_at_pointer(&self) -> Option<Hit> {
        let ray = self.camera.ray_from_screen(self.pointer.0, self.pointer.1);
        raycast::nearest_hit(&ray, &self.targets)
    }

    /// Pointer motion: while dragging, moves the dragged target on the
    /// plane parallel to the view plane at its grab depth; otherwise
    /// updates the highlight to the nearest hit (at most one target,
    /// cleared on miss).
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);

        if let Some(drag) = self.drag {
            let ray = self.camera.ray_from_screen(x, y);
            if let Some(point) = ray.intersect_z_plane(drag.plane_z) {
                self.targets[drag.target].set_position(point);
            }
            return;
        }

        self.highlighted = self.hit_at_pointer().map(|hit| hit.target);
    }

    /// Pointer press: the nearest intersected target always records an
    /// interaction. With the inspection tool active, a linked evidence id
    /// is discovered and nothing is picked up; with no tool active, the
    /// target is grabbed for planar dragging.
    pub fn pointer_down(&mut self, state: &mut SessionState) {
        let Some(hit) = self.hit_at_pointer() else {
            return;
        };

        let target = &self.targets[hit.target];
        state.record_interaction(target.organ().name());

        match state.active_tool() {
            Some(Tool::MagnifyingGlass) => {
                if let Some(evidence_id) = target.evidence_id() {
                    let evidence_id = evidence_id.to_owned();
                    state.discover_evidence(&evidence_id);
                }
            }
            None => {
                let original_z = target.position().z;
                let plane_z = original_z + DRAG_LIFT;
                let lifted = target.position().with_z(plane_z);
                self.targets[hit.target].set_position(lifted);
                self.drag = Some(DragState {
                    target: hit.target,
                    original_z,
                    plane_z,
                });
            }
        }
    }

    /// Pointer release: the dragged target keeps its planar position but
    /// reverts to its original depth.
    pub fn pointer_up(&mut self) {
        if let Some(drag) = self.drag.take() {
            let position = self.targets[drag.target].position().with_z(drag.original_z);
            self.targets[drag.target].set_position(position);
        }
    }

    /// Double click: with no tool active, creates a tag at the exact 3D
    /// intersection point, labeled with the target's name.
    pub fn double_click(&mut self, state: &mut SessionState, clock: &dyn Clock) {
        if state.active_tool().is_some() {
            return;
        }
        if let Some(hit) = self.hit_at_pointer() {
            let organ = self.targets[hit.target].organ();
            state.add_tag(organ.name(), hit.point.to_array(), clock);
        }
    }

    /// Projects every live tag through the current camera into screen
    /// space. Recomputed per call so anchors track the camera exactly.
    #[must_use]
    pub fn tag_anchors(&self, state: &SessionState) -> Vec<TagAnchor> {
        state
            .tags()
            .iter()
            .filter_map(|tag| {
                let position = Vec3::from_array(tag.position);
                self.camera.project_to_screen(position).map(|(x, y)| TagAnchor {
                    id: tag.id.clone(),
                    text: tag.text.clone(),
                    x,
                    y,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use visceraverse_core::organ::Organ;
    use visceraverse_core::scenario::CauseOfDeath;
    use visceraverse_test_support::{FixedClock, sample_evidence, sample_injury, sample_scenario};

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    /// Screen coordinates that put the pointer ray straight through the
    /// given world point (controllers under test use the default camera).
    fn screen_at(world: Vec3) -> (f32, f32) {
        Camera::default().project_to_screen(world).unwrap()
    }

    fn heart_scenario() -> visceraverse_core::scenario::Scenario {
        sample_scenario(
            vec![sample_injury(CauseOfDeath::Stabbing, "Heart")],
            vec![sample_evidence("evidence-heart")],
        )
    }

    fn controller_with_heart_scenario() -> SceneController {
        let mut controller = SceneController::default();
        controller.load_scenario(&heart_scenario());
        controller
    }

    const HEART_CENTER: Vec3 = Vec3::new(0.0, 4.0, 1.0);

    #[test]
    fn test_pointer_move_highlights_nearest_target() {
        let mut controller = controller_with_heart_scenario();
        let (x, y) = screen_at(HEART_CENTER);

        controller.pointer_move(x, y);

        assert_eq!(
            controller.highlighted().map(HitTarget::organ),
            Some(Organ::Heart)
        );
    }

    #[test]
    fn test_highlight_clears_on_miss() {
        let mut controller = controller_with_heart_scenario();
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);

        controller.pointer_move(0.0, 0.0);

        assert!(controller.highlighted().is_none());
    }

    #[test]
    fn test_pointer_down_records_interaction() {
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);

        controller.pointer_down(&mut state);

        assert_eq!(state.interactions().len(), 1);
        assert_eq!(state.interactions()[0].name, "Heart");
        assert_eq!(state.interactions()[0].count, 1);
    }

    #[test]
    fn test_pointer_down_with_magnifier_discovers_evidence_without_drag() {
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        state.set_active_tool(Tool::MagnifyingGlass);
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);

        controller.pointer_down(&mut state);

        assert_eq!(state.discovered_evidence(), ["evidence-heart".to_owned()]);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drag_moves_on_plane_and_reverts_depth() {
        // Arrange
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);

        // Act — grab, drag sideways on the lifted plane, release.
        controller.pointer_down(&mut state);
        assert!(controller.is_dragging());
        let (drag_x, drag_y) = screen_at(Vec3::new(3.0, 0.0, DRAG_LIFT));
        controller.pointer_move(drag_x, drag_y);
        let mid_drag_z = controller.targets()[0].position().z;
        controller.pointer_up();

        // Assert — while dragged the target sits on the lifted plane, and
        // release restores the original depth while keeping the planar move.
        assert!((mid_drag_z - DRAG_LIFT).abs() < 1e-4);
        let rest = controller.targets()[0].position();
        assert!(rest.z.abs() < 1e-4);
        assert!(rest.x.abs() > 1e-3 || rest.y.abs() > 1e-3, "target did not move");
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_double_click_tags_the_intersection_point() {
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        let clock = fixed_clock();
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);

        controller.double_click(&mut state, &clock);

        assert_eq!(state.tags().len(), 1);
        assert_eq!(state.tags()[0].text, "Heart");
        // The anchor sits on the capsule surface in front of the heart.
        let tag_z = state.tags()[0].position[2];
        assert!(tag_z > HEART_CENTER.z, "tag z was {tag_z}");
    }

    #[test]
    fn test_double_click_with_tool_active_is_ignored() {
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        state.set_active_tool(Tool::MagnifyingGlass);
        let clock = fixed_clock();
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);

        controller.double_click(&mut state, &clock);

        assert!(state.tags().is_empty());
    }

    #[test]
    fn test_tag_anchors_are_stable_for_an_unmoved_camera() {
        let controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        let clock = fixed_clock();
        state.add_tag("Heart", [0.0, 4.0, 2.2], &clock);

        let first = controller.tag_anchors(&state);
        let second = controller.tag_anchors(&state);

        assert_eq!(first.len(), 1);
        assert!((first[0].x - second[0].x).abs() < f32::EPSILON);
        assert!((first[0].y - second[0].y).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unload_drops_all_scenario_state() {
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);
        controller.pointer_down(&mut state);
        assert_eq!(controller.decals().len(), 1);

        controller.unload();

        assert!(controller.decals().is_empty());
        assert!(controller.highlighted().is_none());
        assert!(!controller.is_dragging());
        assert!(controller.targets().iter().all(|t| t.evidence_id().is_none()));
        assert!(controller.targets().iter().all(|t| t.position() == Vec3::ZERO));
    }

    #[test]
    fn test_load_scenario_resets_transient_state() {
        let mut controller = controller_with_heart_scenario();
        let mut state = SessionState::new();
        state.set_scenario(heart_scenario());
        let (x, y) = screen_at(HEART_CENTER);
        controller.pointer_move(x, y);
        controller.pointer_down(&mut state);
        assert!(controller.is_dragging());

        controller.load_scenario(&heart_scenario());

        assert!(!controller.is_dragging());
        assert!(controller.highlighted().is_none());
        assert_eq!(controller.decals().len(), 1);
        assert_eq!(controller.decals()[0].organ, Organ::Heart);
    }
}
