//! Interaction tools.

use serde::{Deserialize, Serialize};

/// A selectable interaction mode. At most one tool is active at a time;
/// with no tool active, pointer gestures manipulate organs directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Inspection tool: clicking a target reveals its linked evidence
    /// instead of picking the target up.
    MagnifyingGlass,
}
