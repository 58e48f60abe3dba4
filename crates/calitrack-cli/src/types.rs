use calitrack_types::{Error as ParseError, Resistance, SetEntry};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One `--entry` argument: an exercise name plus its set specs.
///
/// Grammar: `NAME=SET[,SET...]` where a SET is `reps[@resistance][:difficulty]`
/// and resistance is a kilogram value (`10` or `10kg`), a band color, or `bw`.
/// Examples: `Dips=8@10kg,8@10kg:hard`, `Assisted Pull-ups (Band)=8@red:ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySpec {
    pub exercise: String,
    pub sets: Vec<SetEntry>,
}

impl FromStr for EntrySpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, specs)) = s.split_once('=') else {
            return Err(ParseError::Parse(format!(
                "Entry must look like EXERCISE=SETS: {}",
                s
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ParseError::Parse(
                "Entry has an empty exercise name".to_string(),
            ));
        }

        let mut sets = Vec::new();
        for spec in specs.split(',') {
            let spec = spec.trim();
            if spec.is_empty() {
                continue;
            }
            sets.push(parse_set(spec)?);
        }

        Ok(EntrySpec {
            exercise: name.to_string(),
            sets,
        })
    }
}

fn parse_set(spec: &str) -> Result<SetEntry, ParseError> {
    let (main, difficulty) = match spec.split_once(':') {
        Some((main, difficulty)) => (main, Some(difficulty.trim().parse()?)),
        None => (spec, None),
    };

    let (reps_part, resistance) = match main.split_once('@') {
        Some((reps, resistance)) => (reps, resistance.trim().parse::<Resistance>()?),
        None => (main, Resistance::None),
    };

    let reps_part = reps_part.trim();
    let reps = if reps_part.is_empty() {
        None
    } else {
        Some(reps_part.parse::<u32>().map_err(|_| {
            ParseError::Parse(format!("Invalid rep count: {}", reps_part))
        })?)
    };

    let (weight, band) = match resistance {
        Resistance::Weight(kg) => (Some(kg), None),
        Resistance::Band(band) => (None, Some(band)),
        Resistance::None => (None, None),
    };

    Ok(SetEntry {
        reps,
        weight,
        band,
        difficulty,
    })
}
