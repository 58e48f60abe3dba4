use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::split::Split;
use crate::error::Error;

/// Resistance band color used for assisted exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Red,
    Purple,
    Grey,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Red => write!(f, "Red"),
            Band::Purple => write!(f, "Purple"),
            Band::Grey => write!(f, "Grey"),
        }
    }
}

impl FromStr for Band {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(Band::Red),
            "purple" => Ok(Band::Purple),
            "grey" | "gray" => Ok(Band::Grey),
            other => Err(Error::Parse(format!("Unknown band color: {}", other))),
        }
    }
}

/// Perceived difficulty of one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[serde(rename = "OK")]
    Ok,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Ok => write!(f, "OK"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "ok" => Ok(Difficulty::Ok),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::Parse(format!("Unknown difficulty: {}", other))),
        }
    }
}

/// Load on a set, viewed as a tagged union.
///
/// Sets persist `weight` and `band` as two optional fields (the shape the
/// original records used); this enum is the derived view for code that wants
/// to match on what the set was actually loaded with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resistance {
    /// Added load in kilograms.
    Weight(f64),
    /// Band assistance instead of load.
    Band(Band),
    /// Plain bodyweight, nothing recorded.
    None,
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resistance::Weight(kg) => write!(f, "{} kg", kg),
            Resistance::Band(band) => write!(f, "{} band", band),
            Resistance::None => write!(f, "bodyweight"),
        }
    }
}

impl FromStr for Resistance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("bw") {
            return Ok(Resistance::None);
        }
        if let Ok(band) = trimmed.parse::<Band>() {
            return Ok(Resistance::Band(band));
        }
        let number = trimmed
            .strip_suffix("kg")
            .unwrap_or(trimmed)
            .trim();
        number
            .parse::<f64>()
            .map(Resistance::Weight)
            .map_err(|_| Error::Parse(format!("Unknown resistance: {}", trimmed)))
    }
}

/// One completed set of one exercise.
///
/// Every field is optional; a set the user never filled in is "empty" and
/// does not count towards session validity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    /// Added load in kilograms. Mutually exclusive with `band` in practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Band assistance for assisted variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Band>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl SetEntry {
    /// True when the user recorded nothing at all for this set.
    pub fn is_empty(&self) -> bool {
        self.reps.is_none()
            && self.weight.is_none()
            && self.band.is_none()
            && self.difficulty.is_none()
    }

    /// The tagged-union view of `weight`/`band`. Weight wins if both are set.
    pub fn resistance(&self) -> Resistance {
        if let Some(kg) = self.weight {
            Resistance::Weight(kg)
        } else if let Some(band) = self.band {
            Resistance::Band(band)
        } else {
            Resistance::None
        }
    }
}

/// Ordered sets logged for one exercise within one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise: String,
    pub sets: Vec<SetEntry>,
}

impl ExerciseLog {
    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(SetEntry::is_empty)
    }
}

/// One logged workout: a calendar day, a split, and the exercises performed.
///
/// `log` is an ordered sequence rather than a map so that serialization
/// round-trips preserve the order exercises were entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub date: NaiveDate,
    pub split: Split,
    pub log: Vec<ExerciseLog>,
}

impl Session {
    /// Look up the log for one exercise by name. First match wins.
    pub fn exercise(&self, name: &str) -> Option<&ExerciseLog> {
        self.log.iter().find(|log| log.exercise == name)
    }

    /// True when no exercise has a single non-empty set.
    pub fn is_empty(&self) -> bool {
        self.log.iter().all(ExerciseLog::is_empty)
    }

    /// Total number of sets across all exercises.
    pub fn set_count(&self) -> usize {
        self.log.iter().map(|log| log.sets.len()).sum()
    }
}
