use calitrack_types::{Error as ParseError, Session, SetEntry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Time window selector for progress queries.
///
/// The four presets mirror the chart timeframe picker; anything else parses
/// as a raw day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    Days(u32),
}

impl TimeRange {
    pub fn days(self) -> i64 {
        match self {
            TimeRange::OneMonth => 30,
            TimeRange::ThreeMonths => 90,
            TimeRange::SixMonths => 180,
            TimeRange::OneYear => 365,
            TimeRange::Days(n) => i64::from(n),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::OneMonth => write!(f, "1m"),
            TimeRange::ThreeMonths => write!(f, "3m"),
            TimeRange::SixMonths => write!(f, "6m"),
            TimeRange::OneYear => write!(f, "1y"),
            TimeRange::Days(n) => write!(f, "{}d", n),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" => Ok(TimeRange::OneMonth),
            "3m" => Ok(TimeRange::ThreeMonths),
            "6m" => Ok(TimeRange::SixMonths),
            "1y" => Ok(TimeRange::OneYear),
            other => other
                .strip_suffix('d')
                .unwrap_or(other)
                .parse::<u32>()
                .map(TimeRange::Days)
                .map_err(|_| ParseError::Parse(format!("Unknown time range: {}", s))),
        }
    }
}

/// One chart point: per-session averages for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub avg_reps: f64,
    pub avg_weight: f64,
}

/// Chart series for one exercise, in input session order.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseProgress {
    pub exercise: String,
    pub points: Vec<ProgressPoint>,
}

/// Group sessions into per-exercise series of per-session averages.
///
/// Sessions are walked in the given order (chronological only if the caller
/// pre-sorted, e.g. via `filter_by_split_and_window`); exercises appear in
/// first-appearance order. `filter`, when present, restricts the output to
/// the named exercises.
///
/// Averaging matches the historical charts: every set counts in the
/// denominator, and a set without a numeric weight (band-assisted or plain
/// bodyweight) contributes 0 to the weight sum. A log with no sets at all
/// averages to 0 rather than dividing by zero.
pub fn group_by_exercise(sessions: &[Session], filter: Option<&[String]>) -> Vec<ExerciseProgress> {
    let mut series: Vec<ExerciseProgress> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for session in sessions {
        for log in &session.log {
            if let Some(wanted) = filter {
                if !wanted.iter().any(|name| name == &log.exercise) {
                    continue;
                }
            }

            let point = average_sets(session.date, &log.sets);
            match index.get(&log.exercise) {
                Some(&i) => series[i].points.push(point),
                None => {
                    index.insert(log.exercise.clone(), series.len());
                    series.push(ExerciseProgress {
                        exercise: log.exercise.clone(),
                        points: vec![point],
                    });
                }
            }
        }
    }

    series
}

fn average_sets(date: NaiveDate, sets: &[SetEntry]) -> ProgressPoint {
    let divisor = sets.len().max(1) as f64;
    let rep_sum: u32 = sets.iter().filter_map(|s| s.reps).sum();
    let weight_sum: f64 = sets.iter().filter_map(|s| s.weight).sum();

    ProgressPoint {
        date,
        avg_reps: f64::from(rep_sum) / divisor,
        avg_weight: weight_sum / divisor,
    }
}
