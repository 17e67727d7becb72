//! Test backend — scripted `LlmClient` implementation for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use visceraverse_core::backend::LlmClient;
use visceraverse_core::error::DomainError;

/// A backend client that replays a predetermined sequence of responses and
/// records how many calls were made. When a single response is configured it
/// is returned on every call.
pub struct ScriptedLlmClient {
    responses: Mutex<Vec<Result<serde_json::Value, DomainError>>>,
    call_count: Mutex<usize>,
}

impl ScriptedLlmClient {
    /// Create a scripted client with the given response sequence.
    #[must_use]
    pub fn new(responses: Vec<Result<serde_json::Value, DomainError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            call_count: Mutex::new(0),
        }
    }

    /// Create a client that always returns the given JSON value.
    #[must_use]
    pub fn always_valid(json: serde_json::Value) -> Self {
        Self::new(vec![Ok(json)])
    }

    /// Create a client that always returns the given error.
    #[must_use]
    pub fn always_error(error: DomainError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Returns the number of calls made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn call_json(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _schema_description: &str,
    ) -> Result<serde_json::Value, DomainError> {
        *self.call_count.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(DomainError::Backend("scripted responses exhausted".into()));
        }
        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
