//! The session state store.
//!
//! Process-local state for a single examination session. Writers go through
//! the named action methods below; readers take snapshots via [`SessionState::view`].
//! Every action is synchronous and atomic from the caller's point of view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use visceraverse_core::clock::Clock;
use visceraverse_core::scenario::{Injury, Scenario};

use crate::tool::Tool;

/// Interaction tally for one organ. One entry per distinct organ name, in
/// first-interacted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganInteraction {
    /// The organ's anatomical label.
    pub name: String,
    /// How many times the organ has been interacted with. Never resets
    /// except on full state clear.
    pub count: u32,
}

/// A user-created, removable annotation anchored to a point in scene space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTag {
    /// Unique tag id, fresh per creation.
    pub id: String,
    /// Annotation text.
    pub text: String,
    /// Anchor point in scene space.
    pub position: [f32; 3],
    /// When the tag was created.
    pub created_at: DateTime<Utc>,
}

/// The session state aggregate. Initialized empty; see [`SessionState::clear`].
#[derive(Debug, Default)]
pub struct SessionState {
    scenario: Option<Scenario>,
    loading: bool,
    interactions: Vec<OrganInteraction>,
    tags: Vec<DataTag>,
    discovered_evidence: Vec<String>,
    injuries: Vec<Injury>,
    active_tool: Option<Tool>,
    next_tag_id: u64,
}

/// Serializable snapshot of the session state. Evidence entries carry their
/// merged `discovered` flags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The current scenario, if any, with discovery flags applied.
    pub scenario: Option<Scenario>,
    /// Whether a generation request is in flight.
    pub loading: bool,
    /// Interaction tallies in first-interacted order.
    pub interactions: Vec<OrganInteraction>,
    /// All live tags, in creation order.
    pub tags: Vec<DataTag>,
    /// Discovered evidence ids, in discovery order.
    pub discovered_evidence: Vec<String>,
    /// The injuries view for the current scenario.
    pub injuries: Vec<Injury>,
    /// The active tool, if any.
    pub active_tool: Option<Tool>,
}

impl SessionState {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current scenario, if one is loaded.
    #[must_use]
    pub fn scenario(&self) -> Option<&Scenario> {
        self.scenario.as_ref()
    }

    /// Whether a generation request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Interaction tallies in first-interacted order.
    #[must_use]
    pub fn interactions(&self) -> &[OrganInteraction] {
        &self.interactions
    }

    /// All live tags, in creation order.
    #[must_use]
    pub fn tags(&self) -> &[DataTag] {
        &self.tags
    }

    /// Discovered evidence ids, in discovery order.
    #[must_use]
    pub fn discovered_evidence(&self) -> &[String] {
        &self.discovered_evidence
    }

    /// The injuries view for the current scenario.
    #[must_use]
    pub fn injuries(&self) -> &[Injury] {
        &self.injuries
    }

    /// The active tool, if any.
    #[must_use]
    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    /// Replaces the scenario wholesale. The injuries view is reset to the
    /// new scenario's injuries and the discovered-evidence set is emptied,
    /// so stale discovery flags from a previous scenario never survive a
    /// scenario swap.
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.injuries = scenario.injuries.clone();
        self.discovered_evidence.clear();
        self.scenario = Some(scenario);
    }

    /// Sets the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Records an interaction with the named organ: the first touch creates
    /// an entry with count 1, subsequent touches increment it.
    pub fn record_interaction(&mut self, organ_name: &str) {
        if let Some(entry) = self
            .interactions
            .iter_mut()
            .find(|entry| entry.name == organ_name)
        {
            entry.count += 1;
        } else {
            self.interactions.push(OrganInteraction {
                name: organ_name.to_owned(),
                count: 1,
            });
        }
    }

    /// Appends a tag with a fresh unique id and returns the id.
    pub fn add_tag(&mut self, text: &str, position: [f32; 3], clock: &dyn Clock) -> String {
        self.next_tag_id += 1;
        let id = format!("tag-{}", self.next_tag_id);
        self.tags.push(DataTag {
            id: id.clone(),
            text: text.to_owned(),
            position,
            created_at: clock.now(),
        });
        id
    }

    /// Removes the tag with the given id. No-op if absent.
    pub fn remove_tag(&mut self, id: &str) {
        self.tags.retain(|tag| tag.id != id);
    }

    /// Marks an evidence item discovered. Idempotent: a second call with the
    /// same id leaves the set unchanged. Ids not present in the current
    /// scenario's evidence are skipped, which keeps the discovered set a
    /// subset of the scenario's evidence ids.
    pub fn discover_evidence(&mut self, id: &str) {
        let known = self
            .scenario
            .as_ref()
            .is_some_and(|scenario| scenario.has_evidence(id));
        if !known {
            debug!(evidence_id = id, "ignoring unknown evidence id");
            return;
        }
        if !self.discovered_evidence.iter().any(|seen| seen == id) {
            self.discovered_evidence.push(id.to_owned());
        }
    }

    /// Selects a tool, with toggle semantics: selecting the already-active
    /// tool deselects it.
    pub fn set_active_tool(&mut self, tool: Tool) {
        if self.active_tool == Some(tool) {
            self.active_tool = None;
        } else {
            self.active_tool = Some(tool);
        }
    }

    /// Resets every field to its empty initial value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Takes a serializable snapshot, merging discovery flags into the
    /// scenario's evidence entries.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let scenario = self.scenario.clone().map(|mut scenario| {
            for item in &mut scenario.evidence {
                item.discovered = self.discovered_evidence.iter().any(|id| *id == item.id);
            }
            scenario
        });
        SessionView {
            scenario,
            loading: self.loading,
            interactions: self.interactions.clone(),
            tags: self.tags.clone(),
            discovered_evidence: self.discovered_evidence.clone(),
            injuries: self.injuries.clone(),
            active_tool: self.active_tool,
        }
    }
}
