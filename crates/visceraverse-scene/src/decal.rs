//! Injury decals.
//!
//! Each injury whose `location` names a known organ produces a decal-style
//! overlay on that target; everything else is skipped without error. A
//! scenario/anatomy mismatch is content drift, not a fault.

use serde::Serialize;
use tracing::debug;
use visceraverse_core::organ::Organ;
use visceraverse_core::scenario::{CauseOfDeath, Injury};

/// A wound marker resolved onto an anatomical target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryDecal {
    /// The target the decal is attached to.
    pub organ: Organ,
    /// Injury classification.
    pub kind: CauseOfDeath,
    /// Decal position on the target's surface.
    pub position: [f32; 3],
    /// Decal orientation as Euler angles.
    pub orientation: [f32; 3],
    /// Decal extent.
    pub size: [f32; 3],
}

/// Resolves scenario injuries onto the closed organ set. Unknown locations
/// are dropped with a debug log.
#[must_use]
pub fn resolve_decals(injuries: &[Injury]) -> Vec<InjuryDecal> {
    injuries
        .iter()
        .filter_map(|injury| match Organ::parse_name(&injury.location) {
            Some(organ) => Some(InjuryDecal {
                organ,
                kind: injury.kind,
                position: injury.position,
                orientation: injury.orientation,
                size: injury.size,
            }),
            None => {
                debug!(location = %injury.location, "skipping injury on unknown anatomical target");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use visceraverse_test_support::sample_injury;

    #[test]
    fn test_known_locations_resolve_to_decals() {
        let injuries = vec![
            sample_injury(CauseOfDeath::Stabbing, "Heart"),
            sample_injury(CauseOfDeath::BluntForceTrauma, "left lung"),
        ];

        let decals = resolve_decals(&injuries);

        assert_eq!(decals.len(), 2);
        assert_eq!(decals[0].organ, Organ::Heart);
        assert_eq!(decals[1].organ, Organ::LeftLung);
    }

    #[test]
    fn test_unknown_locations_are_silently_skipped() {
        let injuries = vec![
            sample_injury(CauseOfDeath::Stabbing, "Heart"),
            sample_injury(CauseOfDeath::Gunshot, "Spleen"),
        ];

        let decals = resolve_decals(&injuries);

        assert_eq!(decals.len(), 1);
        assert_eq!(decals[0].organ, Organ::Heart);
    }
}
