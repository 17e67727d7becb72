//! Prompt templates for the generation flows.

use std::fmt::Write as _;

use visceraverse_core::organ::Organ;

use crate::flows::{CustomizeScenarioInput, GenerateScenarioInput, SummarizeFindingsInput};

/// System prompt shared by every flow.
pub const SYSTEM_PROMPT: &str = "You are an expert forensic pathologist. \
All cases are entirely fictional and used for an educational autopsy simulation.";

/// Default seed instruction used when the user provides no steering hint.
pub const DEFAULT_SEED: &str = "a single stab wound to the heart";

/// Schema description embedded in every scenario-generation request.
#[must_use]
pub fn scenario_schema() -> String {
    let organs: Vec<&str> = Organ::ALL.iter().map(|organ| organ.name()).collect();
    format!(
        r#"{{
  "scenario": "string — a fictional autopsy scenario narrative",
  "causeOfDeath": "one of: stabbing | gunshot | poisoning | blunt-force-trauma | unknown",
  "timeOfDeath": "string — the estimated time of death",
  "injuriesSustained": "string — a description of injuries sustained",
  "injuries": [
    {{
      "type": "one of: stabbing | gunshot | poisoning | blunt-force-trauma | unknown",
      "location": "one of: {organs}",
      "position": [x, y, z],
      "orientation": [x, y, z],
      "size": [x, y, z]
    }}
  ],
  "evidence": [
    {{
      "id": "unique string, e.g. evidence-heart",
      "description": "string — forensic description",
      "type": "one of: visual | toxicology | document",
      "discovered": false,
      "data": {{ "title": "string" }}
    }}
  ]
}}"#,
        organs = organs.join(" | "),
    )
}

/// Builds the user prompt for scenario generation.
#[must_use]
pub fn generate_prompt(input: &GenerateScenarioInput) -> String {
    let hint = input.query().unwrap_or(DEFAULT_SEED);
    format!(
        "Please generate a fictional autopsy scenario based on the following input: {hint}\n\n\
         The scenario should include:\n\
         - A detailed narrative of the circumstances leading to the death.\n\
         - The cause of death.\n\
         - The estimated time of death.\n\
         - A description of injuries sustained by the deceased.\n\
         - Structured injury markers placed on the named organs.\n\
         - Discoverable evidence items linked to the injured organs."
    )
}

/// Builds the user prompt for the customization flow.
#[must_use]
pub fn customize_prompt(input: &CustomizeScenarioInput) -> String {
    let mut prompt = String::from(
        "Based on the provided information, generate a detailed and engaging \
         description of an autopsy scenario.\n\n",
    );
    let _ = writeln!(prompt, "Cause of Death: {}", input.cause_of_death);
    let _ = writeln!(prompt, "Time of Death: {}", input.time_of_death);
    if let Some(injuries) = &input.injuries_sustained {
        let _ = writeln!(prompt, "Injuries Sustained: {injuries}");
    }
    if let Some(context) = &input.additional_context {
        let _ = writeln!(prompt, "Additional Context: {context}");
    }
    prompt
}

/// Builds the user prompt for the findings-summary flow.
#[must_use]
pub fn summarize_prompt(input: &SummarizeFindingsInput) -> String {
    format!(
        "Please summarize the following autopsy findings in relation to the \
         provided scenario.\n\nScenario: {}\n\nFindings: {}",
        input.scenario, input.findings
    )
}
