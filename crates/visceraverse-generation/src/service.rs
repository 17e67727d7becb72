//! Scenario generation service.
//!
//! [`ScenarioGenerator`] is the seam the action boundary calls through.
//! The live implementation prompts a generative backend and validates the
//! structured result; the predefined implementation returns one fixed
//! scenario for deterministic deployments.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use visceraverse_core::error::DomainError;
use visceraverse_core::scenario::Scenario;

use crate::flows::{
    CustomizeScenarioInput, FindingsSummary, GenerateScenarioInput, ScenarioDescription,
    SummarizeFindingsInput,
};
use visceraverse_core::backend::LlmClient;

use crate::{predefined, prompt, validate};

/// The generation service seam.
///
/// Each call is independent: concurrent duplicate requests are not
/// coalesced, and callers take whichever result resolves last.
#[async_trait]
pub trait ScenarioGenerator: Send + Sync {
    /// Generates a full scenario from an optional steering hint.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Backend` on transport failure and
    /// `DomainError::Validation` when the backend output violates the
    /// contract. Never returns a partially populated scenario.
    async fn generate(&self, input: &GenerateScenarioInput) -> Result<Scenario, DomainError>;

    /// Writes a scenario description around user-fixed parameters.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ScenarioGenerator::generate`].
    async fn customize(
        &self,
        input: &CustomizeScenarioInput,
    ) -> Result<ScenarioDescription, DomainError>;

    /// Summarizes user-provided autopsy findings against a scenario.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ScenarioGenerator::generate`].
    async fn summarize(
        &self,
        input: &SummarizeFindingsInput,
    ) -> Result<FindingsSummary, DomainError>;
}

/// Live generator backed by an [`LlmClient`].
pub struct LlmScenarioGenerator {
    client: Arc<dyn LlmClient>,
}

impl LlmScenarioGenerator {
    /// Wraps a backend client.
    #[must_use]
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ScenarioGenerator for LlmScenarioGenerator {
    async fn generate(&self, input: &GenerateScenarioInput) -> Result<Scenario, DomainError> {
        let user_prompt = prompt::generate_prompt(input);
        let schema = prompt::scenario_schema();

        let output = self
            .client
            .call_json(prompt::SYSTEM_PROMPT, &user_prompt, &schema)
            .await?;

        let scenario = validate::parse_scenario(output)?;
        info!(
            cause_of_death = %scenario.cause_of_death,
            injuries = scenario.injuries.len(),
            evidence = scenario.evidence.len(),
            "generated scenario accepted"
        );
        Ok(scenario)
    }

    async fn customize(
        &self,
        input: &CustomizeScenarioInput,
    ) -> Result<ScenarioDescription, DomainError> {
        let user_prompt = prompt::customize_prompt(input);
        let schema = r#"{ "scenarioDescription": "string" }"#;

        let output = self
            .client
            .call_json(prompt::SYSTEM_PROMPT, &user_prompt, schema)
            .await?;

        let description: ScenarioDescription = serde_json::from_value(output)
            .map_err(|e| DomainError::Validation(format!("output does not match schema: {e}")))?;
        if description.scenario_description.trim().is_empty() {
            return Err(DomainError::Validation(
                "backend returned an empty scenario description".to_owned(),
            ));
        }
        Ok(description)
    }

    async fn summarize(
        &self,
        input: &SummarizeFindingsInput,
    ) -> Result<FindingsSummary, DomainError> {
        let user_prompt = prompt::summarize_prompt(input);
        let schema = r#"{ "summary": "string" }"#;

        let output = self
            .client
            .call_json(prompt::SYSTEM_PROMPT, &user_prompt, schema)
            .await?;

        let summary: FindingsSummary = serde_json::from_value(output)
            .map_err(|e| DomainError::Validation(format!("output does not match schema: {e}")))?;
        if summary.summary.trim().is_empty() {
            return Err(DomainError::Validation(
                "backend returned an empty summary".to_owned(),
            ));
        }
        Ok(summary)
    }
}

/// Deterministic generator that never contacts a backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredefinedScenarioGenerator;

#[async_trait]
impl ScenarioGenerator for PredefinedScenarioGenerator {
    async fn generate(&self, _input: &GenerateScenarioInput) -> Result<Scenario, DomainError> {
        Ok(predefined::scenario())
    }

    async fn customize(
        &self,
        _input: &CustomizeScenarioInput,
    ) -> Result<ScenarioDescription, DomainError> {
        Err(DomainError::Backend(
            "scenario customization is unavailable in predefined mode".to_owned(),
        ))
    }

    async fn summarize(
        &self,
        _input: &SummarizeFindingsInput,
    ) -> Result<FindingsSummary, DomainError> {
        Err(DomainError::Backend(
            "findings summarization is unavailable in predefined mode".to_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visceraverse_core::scenario::CauseOfDeath;
    use visceraverse_test_support::ScriptedLlmClient;

    fn valid_output() -> serde_json::Value {
        serde_json::to_value(predefined::scenario()).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_validated_scenario() {
        // Arrange
        let client = Arc::new(ScriptedLlmClient::always_valid(valid_output()));
        let generator = LlmScenarioGenerator::new(client.clone());

        // Act
        let scenario = generator
            .generate(&GenerateScenarioInput::default())
            .await
            .unwrap();

        // Assert
        assert_eq!(scenario.cause_of_death, CauseOfDeath::Stabbing);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_rejects_schema_violation() {
        // Arrange
        let mut output = valid_output();
        output["evidence"][0]["type"] = serde_json::json!("ballistic");
        let generator = LlmScenarioGenerator::new(Arc::new(ScriptedLlmClient::always_valid(output)));

        // Act
        let err = generator
            .generate(&GenerateScenarioInput::default())
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_generate_propagates_backend_failure() {
        // Arrange
        let client = ScriptedLlmClient::always_error(DomainError::Backend("timeout".into()));
        let generator = LlmScenarioGenerator::new(Arc::new(client));

        // Act
        let err = generator
            .generate(&GenerateScenarioInput::default())
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, DomainError::Backend(_)));
    }

    #[tokio::test]
    async fn test_predefined_generator_ignores_query() {
        // Arrange
        let generator = PredefinedScenarioGenerator;
        let input = GenerateScenarioInput {
            user_query: Some("gunshot on a yacht".into()),
        };

        // Act
        let scenario = generator.generate(&input).await.unwrap();

        // Assert
        assert_eq!(scenario.cause_of_death, CauseOfDeath::Stabbing);
        assert_eq!(scenario.evidence[0].id, "evidence-heart");
    }

    #[tokio::test]
    async fn test_predefined_generator_declines_customize() {
        let generator = PredefinedScenarioGenerator;
        let err = generator
            .customize(&CustomizeScenarioInput {
                cause_of_death: "gunshot".into(),
                time_of_death: "midnight".into(),
                injuries_sustained: None,
                additional_context: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Backend(_)));
    }

    #[tokio::test]
    async fn test_customize_returns_description() {
        // Arrange
        let client = ScriptedLlmClient::always_valid(serde_json::json!({
            "scenarioDescription": "A detailed scenario."
        }));
        let generator = LlmScenarioGenerator::new(Arc::new(client));

        // Act
        let description = generator
            .customize(&CustomizeScenarioInput {
                cause_of_death: "gunshot".into(),
                time_of_death: "midnight".into(),
                injuries_sustained: Some("single entry wound".into()),
                additional_context: None,
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(description.scenario_description, "A detailed scenario.");
    }

    #[tokio::test]
    async fn test_summarize_rejects_empty_summary() {
        // Arrange
        let client = ScriptedLlmClient::always_valid(serde_json::json!({ "summary": "  " }));
        let generator = LlmScenarioGenerator::new(Arc::new(client));

        // Act
        let err = generator
            .summarize(&SummarizeFindingsInput {
                scenario: "scenario".into(),
                findings: "findings".into(),
            })
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
