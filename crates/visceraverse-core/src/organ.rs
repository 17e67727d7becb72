//! Closed enumeration of anatomical targets.
//!
//! Scenario content is free text produced by a generative backend, so organ
//! references are checked against this enumeration at the boundary between
//! scenario content and the fixed rendering target set. Unknown names are a
//! non-fatal lookup miss, never an error surfaced to the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A named anatomical target eligible for interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Organ {
    /// Heart.
    Heart,
    /// Brain.
    Brain,
    /// Left lung.
    LeftLung,
    /// Right lung.
    RightLung,
    /// Liver.
    Liver,
    /// Stomach.
    Stomach,
    /// Small intestine.
    SmallIntestine,
    /// Large intestine.
    LargeIntestine,
    /// Kidney.
    Kidney,
}

impl Organ {
    /// All organs, in the order the scene lays them out.
    pub const ALL: [Organ; 9] = [
        Organ::Heart,
        Organ::Brain,
        Organ::LeftLung,
        Organ::RightLung,
        Organ::Liver,
        Organ::Stomach,
        Organ::SmallIntestine,
        Organ::LargeIntestine,
        Organ::Kidney,
    ];

    /// The human-readable anatomical label, as scenario text refers to it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Organ::Heart => "Heart",
            Organ::Brain => "Brain",
            Organ::LeftLung => "Left Lung",
            Organ::RightLung => "Right Lung",
            Organ::Liver => "Liver",
            Organ::Stomach => "Stomach",
            Organ::SmallIntestine => "Small Intestine",
            Organ::LargeIntestine => "Large Intestine",
            Organ::Kidney => "Kidney",
        }
    }

    /// The lowercase, hyphenated form used in evidence ids
    /// (`evidence-heart`, `evidence-left-lung`).
    #[must_use]
    pub fn slug(self) -> String {
        self.name().to_lowercase().replace(' ', "-")
    }

    /// Case-insensitive lookup from an anatomical label.
    #[must_use]
    pub fn parse_name(label: &str) -> Option<Organ> {
        let normalized = label.trim().to_lowercase();
        Organ::ALL
            .into_iter()
            .find(|organ| organ.name().to_lowercase() == normalized)
    }
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Organ {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organ::parse_name(s)
            .ok_or_else(|| DomainError::Lookup(format!("unknown anatomical target: {s}")))
    }
}
