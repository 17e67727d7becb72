//! Shared test doubles and fixtures for VisceraVerse.

mod clock;
mod llm;
mod scenario;

pub use clock::FixedClock;
pub use llm::ScriptedLlmClient;
pub use scenario::{sample_evidence, sample_injury, sample_scenario};
