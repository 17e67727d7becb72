//! Strict validation of generative-backend output.
//!
//! Output that fails any check is treated as a generation failure and
//! discarded whole; nothing is coerced or repaired.

use std::collections::HashSet;

use visceraverse_core::error::DomainError;
use visceraverse_core::scenario::{CauseOfDeath, Scenario};

/// Parses and validates a raw backend output value into a [`Scenario`].
///
/// # Errors
///
/// Returns `DomainError::Validation` when the value does not match the
/// scenario schema or violates a consistency rule.
pub fn parse_scenario(value: serde_json::Value) -> Result<Scenario, DomainError> {
    let scenario: Scenario = serde_json::from_value(value)
        .map_err(|e| DomainError::Validation(format!("output does not match schema: {e}")))?;
    check_consistency(&scenario)?;
    Ok(scenario)
}

/// Consistency rules beyond the structural schema.
fn check_consistency(scenario: &Scenario) -> Result<(), DomainError> {
    // Cause of death must be reflected in the injury list, unless the cause
    // is undetermined or no external injuries are present (e.g. poisoning).
    if !scenario.injuries.is_empty()
        && scenario.cause_of_death != CauseOfDeath::Unknown
        && !scenario
            .injuries
            .iter()
            .any(|injury| injury.kind == scenario.cause_of_death)
    {
        return Err(DomainError::Validation(format!(
            "cause of death '{}' does not match any injury",
            scenario.cause_of_death
        )));
    }

    let mut seen_ids = HashSet::new();
    for item in &scenario.evidence {
        if item.id.trim().is_empty() {
            return Err(DomainError::Validation(
                "evidence id must be non-empty".to_owned(),
            ));
        }
        if !seen_ids.insert(item.id.as_str()) {
            return Err(DomainError::Validation(format!(
                "duplicate evidence id '{}'",
                item.id
            )));
        }
        if item.discovered {
            return Err(DomainError::Validation(format!(
                "evidence '{}' must start undiscovered",
                item.id
            )));
        }
        if item.data.title.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "evidence '{}' is missing a title",
                item.id
            )));
        }
    }

    Ok(())
}
