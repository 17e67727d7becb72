//! The scenario data model.
//!
//! A [`Scenario`] is generated case content: narrative text plus structured
//! injury and evidence records. It is immutable once produced and replaced
//! wholesale on regeneration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Cause-of-death labels, also used to classify individual injuries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CauseOfDeath {
    /// Death by stabbing.
    Stabbing,
    /// Death by gunshot.
    Gunshot,
    /// Death by poisoning.
    Poisoning,
    /// Death by blunt-force trauma.
    BluntForceTrauma,
    /// Undetermined cause.
    Unknown,
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CauseOfDeath::Stabbing => "stabbing",
            CauseOfDeath::Gunshot => "gunshot",
            CauseOfDeath::Poisoning => "poisoning",
            CauseOfDeath::BluntForceTrauma => "blunt-force-trauma",
            CauseOfDeath::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// A structured wound descriptor used to place a visual marker on an
/// anatomical target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Injury {
    /// Injury classification.
    #[serde(rename = "type")]
    pub kind: CauseOfDeath,
    /// Anatomical label, e.g. `"Heart"` or `"Left Lung"`. Must match a known
    /// organ name or the injury is silently unrendered.
    pub location: String,
    /// Marker position on the target, in scene space.
    pub position: [f32; 3],
    /// Marker orientation as Euler angles.
    pub orientation: [f32; 3],
    /// Marker extent.
    pub size: [f32; 3],
}

/// Evidence classification tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceKind {
    /// Directly observable on the body.
    Visual,
    /// Laboratory toxicology result.
    Toxicology,
    /// Documentary evidence.
    Document,
}

/// Open evidence payload: a statically required title plus scenario-specific
/// extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceData {
    /// Display title for the evidence item.
    pub title: String,
    /// Any additional fields the backend chose to attach.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A discoverable fact item linked to an anatomical target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    /// Unique id within the scenario's evidence list.
    pub id: String,
    /// Forensic description shown once discovered.
    pub description: String,
    /// Evidence classification.
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    /// Whether the user has revealed this item. Starts `false`; flips `true`
    /// exactly once.
    pub discovered: bool,
    /// Open payload with a required title.
    pub data: EvidenceData,
}

/// Generated case content. Replaced wholesale on regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Narrative of the circumstances leading to the death.
    pub scenario: String,
    /// The determined cause of death.
    pub cause_of_death: CauseOfDeath,
    /// The estimated time of death, as free text.
    pub time_of_death: String,
    /// Free-text description of injuries sustained.
    pub injuries_sustained: String,
    /// Structured wound descriptors, in presentation order.
    pub injuries: Vec<Injury>,
    /// Discoverable evidence items, in presentation order.
    pub evidence: Vec<Evidence>,
}

impl Scenario {
    /// Returns true when `id` names an evidence item in this scenario.
    #[must_use]
    pub fn has_evidence(&self, id: &str) -> bool {
        self.evidence.iter().any(|item| item.id == id)
    }
}
