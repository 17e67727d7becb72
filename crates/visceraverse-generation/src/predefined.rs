//! The predefined fallback scenario.
//!
//! Used when deterministic, zero-cost operation is required instead of a
//! live generative backend: a single stab wound to the heart with one
//! evidence item.

use std::collections::BTreeMap;

use visceraverse_core::scenario::{
    CauseOfDeath, Evidence, EvidenceData, EvidenceKind, Injury, Scenario,
};

/// Returns the fixed heart-stab scenario.
#[must_use]
pub fn scenario() -> Scenario {
    Scenario {
        scenario: "The deceased is a 45-year-old male found in his home office. \
                   There are no signs of forced entry. The scene suggests a sudden \
                   collapse. The initial report from paramedics notes a single, deep \
                   puncture wound to the chest."
            .to_owned(),
        cause_of_death: CauseOfDeath::Stabbing,
        time_of_death: "Approximately 10:00 PM".to_owned(),
        injuries_sustained: "A single, clean-edged stab wound is present on the anterior \
                             chest wall, directly over the heart. There are no other \
                             significant injuries or defensive wounds noted."
            .to_owned(),
        injuries: vec![Injury {
            kind: CauseOfDeath::Stabbing,
            location: "Heart".to_owned(),
            position: [0.0, 0.0, 1.5],
            orientation: [0.0, 0.0, 0.0],
            size: [0.5, 0.5, 1.0],
        }],
        evidence: vec![Evidence {
            id: "evidence-heart".to_owned(),
            description: "The stab wound to the heart shows clean, incised margins with \
                          minimal surrounding contusion, suggesting a sharp, single-edged \
                          blade was used. The wound track passes directly through the \
                          right ventricle."
                .to_owned(),
            kind: EvidenceKind::Visual,
            discovered: false,
            data: EvidenceData {
                title: "Stab Wound to Heart".to_owned(),
                extra: BTreeMap::new(),
            },
        }],
    }
}
