//! Generative backend abstraction.
//!
//! The backend itself is an opaque external collaborator: it receives a
//! natural-language instruction and must return structured JSON. In
//! production this is an HTTP client; in tests a scripted double is
//! injected.

use async_trait::async_trait;

use crate::error::DomainError;

/// Client trait for calling a generative backend with a strict JSON schema.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a prompt and returns the backend's JSON output.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Backend` for transport failures and
    /// `DomainError::Validation` when the backend output is not valid JSON.
    async fn call_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema_description: &str,
    ) -> Result<serde_json::Value, DomainError>;
}
