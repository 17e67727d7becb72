//! VisceraVerse — Scenario Generation bounded context.
//!
//! Responsible for the schema-validated generation contract: prompt
//! templating, the generative-backend client, strict output validation,
//! and the deterministic predefined fallback.

pub mod flows;
pub mod llm;
pub mod predefined;
pub mod prompt;
pub mod service;
pub mod validate;
