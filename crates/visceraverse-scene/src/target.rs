//! Anatomical hit-targets.
//!
//! Each organ is a chain of capsule segments along a control path in a
//! shared coordinate frame, standing in for the renderer's tube meshes.
//! Targets carry a translation offset so they can be dragged, and an
//! optional linked evidence id resolved from the current scenario.

use glam::Vec3;
use visceraverse_core::organ::Organ;
use visceraverse_core::scenario::Scenario;

/// A named primitive shape eligible for ray intersection and interaction.
#[derive(Debug, Clone)]
pub struct HitTarget {
    organ: Organ,
    path: Vec<Vec3>,
    radius: f32,
    position: Vec3,
    evidence_id: Option<String>,
}

impl HitTarget {
    fn new(organ: Organ, radius: f32, path: Vec<Vec3>) -> Self {
        Self {
            organ,
            path,
            radius,
            position: Vec3::ZERO,
            evidence_id: None,
        }
    }

    /// The organ this target represents.
    #[must_use]
    pub fn organ(&self) -> Organ {
        self.organ
    }

    /// Capsule radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current translation offset (moves under drag).
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Sets the translation offset.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// The evidence id linked to this target, if the current scenario
    /// provides one.
    #[must_use]
    pub fn evidence_id(&self) -> Option<&str> {
        self.evidence_id.as_deref()
    }

    /// Links evidence from the scenario: an id of the form
    /// `evidence-<organ-slug>` binds to this target.
    pub fn link_evidence(&mut self, scenario: &Scenario) {
        let expected = format!("evidence-{}", self.organ.slug());
        self.evidence_id = scenario
            .evidence
            .iter()
            .find(|item| item.id == expected)
            .map(|item| item.id.clone());
    }

    /// World-space capsule segments, with the drag offset applied.
    pub fn world_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.path
            .windows(2)
            .map(|pair| (pair[0] + self.position, pair[1] + self.position))
    }
}

/// Builds the fixed anatomical target set, fresh for each scenario load.
#[must_use]
pub fn anatomy_layout() -> Vec<HitTarget> {
    vec![
        HitTarget::new(
            Organ::Heart,
            1.2,
            vec![Vec3::new(-0.5, 3.5, 1.0), Vec3::new(0.5, 4.5, 1.0)],
        ),
        HitTarget::new(
            Organ::Brain,
            1.5,
            vec![Vec3::new(-0.8, 9.0, 0.0), Vec3::new(0.8, 9.0, 0.0)],
        ),
        HitTarget::new(
            Organ::LeftLung,
            1.3,
            vec![Vec3::new(-3.0, 2.5, 0.5), Vec3::new(-2.5, 5.5, 0.5)],
        ),
        HitTarget::new(
            Organ::RightLung,
            1.3,
            vec![Vec3::new(3.0, 2.5, 0.5), Vec3::new(2.5, 5.5, 0.5)],
        ),
        HitTarget::new(
            Organ::Liver,
            1.2,
            vec![Vec3::new(1.5, 1.0, 0.5), Vec3::new(4.0, 0.5, 0.0)],
        ),
        HitTarget::new(
            Organ::Stomach,
            1.0,
            vec![
                Vec3::new(0.0, 7.0, 0.0),
                Vec3::new(-2.0, 6.3, 1.4),
                Vec3::new(0.0, 5.6, 0.0),
            ],
        ),
        HitTarget::new(
            Organ::SmallIntestine,
            1.0,
            vec![
                Vec3::new(-5.0, -2.0, 0.0),
                Vec3::new(-3.0, 0.0, 2.0),
                Vec3::new(0.0, -2.0, 0.0),
                Vec3::new(3.0, -4.0, -2.0),
                Vec3::new(5.0, -2.0, 0.0),
            ],
        ),
        HitTarget::new(
            Organ::LargeIntestine,
            1.0,
            vec![
                Vec3::new(-8.0, -7.0, -3.0),
                Vec3::new(-4.0, -4.0, 0.0),
                Vec3::new(0.0, -7.0, 3.0),
                Vec3::new(4.0, -4.0, 0.0),
                Vec3::new(8.0, -7.0, -3.0),
            ],
        ),
        HitTarget::new(
            Organ::Kidney,
            0.9,
            vec![Vec3::new(-1.5, -3.5, -1.0), Vec3::new(1.5, -3.5, -1.0)],
        ),
    ]
}
