//! Generative-backend client.
//!
//! A thin HTTP client over text-generation backends that can return strict
//! JSON. Supports Ollama-style endpoints and OpenAI-compatible chat
//! completion endpoints; the backend itself is an opaque collaborator.

use std::time::Duration;

use async_trait::async_trait;
use visceraverse_core::error::DomainError;

pub use visceraverse_core::backend::LlmClient;

/// Generative backend configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of the backend.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
    /// Bearer token for OpenAI-compatible backends.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_owned(),
            model: "llama3.2:3b".to_owned(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// HTTP implementation of [`LlmClient`].
pub struct HttpLlmClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl HttpLlmClient {
    /// Builds a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: LlmConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn is_ollama_endpoint(&self) -> bool {
        self.config.endpoint.contains("11434") || self.config.endpoint.contains("ollama")
    }

    async fn call_ollama(&self, prompt: &str) -> Result<serde_json::Value, DomainError> {
        let url = format!("{}/api/generate", self.config.endpoint);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "format": "json",
        });

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DomainError::Backend(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::Backend(format!(
                "HTTP {} from generative backend",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DomainError::Backend(format!("failed to read response body: {e}")))?;

        let text = response_json
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or_else(|| DomainError::Backend("backend returned empty response".to_owned()))?;

        serde_json::from_str(text)
            .map_err(|e| DomainError::Validation(format!("backend output is not valid JSON: {e}")))
    }

    async fn call_openai_compatible(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<serde_json::Value, DomainError> {
        let url = format!("{}/v1/chat/completions", self.config.endpoint);

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_prompt},
            ],
            "response_format": {"type": "json_object"},
        });

        let mut request = self.client.post(&url).json(&request_body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Backend(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::Backend(format!(
                "HTTP {} from generative backend",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DomainError::Backend(format!("failed to read response body: {e}")))?;

        let text = response_json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| DomainError::Backend("backend returned empty response".to_owned()))?;

        serde_json::from_str(text)
            .map_err(|e| DomainError::Validation(format!("backend output is not valid JSON: {e}")))
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn call_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema_description: &str,
    ) -> Result<serde_json::Value, DomainError> {
        let full_prompt = format!(
            "{system_prompt}\n\n{user_prompt}\n\nYou must respond with valid JSON matching this schema:\n{schema_description}"
        );

        if self.is_ollama_endpoint() {
            match self.call_ollama(&full_prompt).await {
                Ok(json) => return Ok(json),
                Err(e) => {
                    tracing::debug!("Ollama-style API failed, trying OpenAI-compatible: {e}");
                }
            }
        }

        self.call_openai_compatible(system_prompt, &full_prompt)
            .await
    }
}
