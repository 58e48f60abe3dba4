use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Workout split: the category that decides which exercises are on offer.
///
/// The serialized names ("Push", "Pull", "Legs & Core", "Skills & Mobility")
/// match the records written by earlier versions of the tracker, so old
/// session files keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    Push,
    Pull,
    #[serde(rename = "Legs & Core")]
    LegsCore,
    #[serde(rename = "Skills & Mobility")]
    SkillsMobility,
}

impl Split {
    pub fn all() -> Vec<Self> {
        vec![
            Split::Push,
            Split::Pull,
            Split::LegsCore,
            Split::SkillsMobility,
        ]
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Push => write!(f, "Push"),
            Split::Pull => write!(f, "Pull"),
            Split::LegsCore => write!(f, "Legs & Core"),
            Split::SkillsMobility => write!(f, "Skills & Mobility"),
        }
    }
}

impl FromStr for Split {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "push" => Ok(Split::Push),
            "pull" => Ok(Split::Pull),
            "legs" | "legs-core" | "legs&core" | "legs & core" => Ok(Split::LegsCore),
            "skills" | "mobility" | "skills-mobility" | "skills & mobility" => {
                Ok(Split::SkillsMobility)
            }
            other => Err(Error::Parse(format!("Unknown split: {}", other))),
        }
    }
}
