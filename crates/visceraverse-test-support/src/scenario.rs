//! Scenario fixtures.

use std::collections::BTreeMap;

use visceraverse_core::scenario::{
    CauseOfDeath, Evidence, EvidenceData, EvidenceKind, Injury, Scenario,
};

/// An injury marker on the given anatomical label.
#[must_use]
pub fn sample_injury(kind: CauseOfDeath, location: &str) -> Injury {
    Injury {
        kind,
        location: location.to_owned(),
        position: [0.0, 0.0, 1.5],
        orientation: [0.0, 0.0, 0.0],
        size: [0.5, 0.5, 1.0],
    }
}

/// A visual, undiscovered evidence item with the given id.
#[must_use]
pub fn sample_evidence(id: &str) -> Evidence {
    Evidence {
        id: id.to_owned(),
        description: format!("Description for {id}."),
        kind: EvidenceKind::Visual,
        discovered: false,
        data: EvidenceData {
            title: format!("Title for {id}"),
            extra: BTreeMap::new(),
        },
    }
}

/// A minimal valid scenario with the given injuries and evidence. The cause
/// of death follows the first injury, or `unknown` when there are none.
#[must_use]
pub fn sample_scenario(injuries: Vec<Injury>, evidence: Vec<Evidence>) -> Scenario {
    let cause_of_death = injuries
        .first()
        .map_or(CauseOfDeath::Unknown, |injury| injury.kind);
    Scenario {
        scenario: "A fictional test case.".to_owned(),
        cause_of_death,
        time_of_death: "Approximately 10:00 PM".to_owned(),
        injuries_sustained: "Injuries for testing.".to_owned(),
        injuries,
        evidence,
    }
}
