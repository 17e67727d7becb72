//! Input and output shapes for the generation flows.

use serde::{Deserialize, Serialize};

/// Input for scenario generation. A blank or absent query means "generate
/// anything plausible".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScenarioInput {
    /// Free-text steering hint for the scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_query: Option<String>,
}

impl GenerateScenarioInput {
    /// Returns the steering hint, treating blank strings as absent.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.user_query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
    }
}

/// Input for the scenario customization flow: the user fixes key parameters
/// and the backend writes a description around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizeScenarioInput {
    /// The cause of death the scenario must be built around.
    pub cause_of_death: String,
    /// The time of death the scenario must be built around.
    pub time_of_death: String,
    /// Optional injuries the deceased sustained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injuries_sustained: Option<String>,
    /// Optional additional context for the scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

/// Output of the customization flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDescription {
    /// A detailed description of the customized scenario.
    pub scenario_description: String,
}

/// Input for the findings-summary flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeFindingsInput {
    /// The generated scenario the findings relate to.
    pub scenario: String,
    /// The user-provided autopsy findings.
    pub findings: String,
}

/// Output of the findings-summary flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsSummary {
    /// A summary of the autopsy findings.
    pub summary: String,
}
