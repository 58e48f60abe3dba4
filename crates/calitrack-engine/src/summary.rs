use calitrack_types::{Difficulty, Session, Split};
use chrono::NaiveDate;
use serde::Serialize;

/// Post-workout recap of one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub date: NaiveDate,
    pub split: Split,
    pub exercises: Vec<ExerciseSummary>,
    pub total_sets: usize,
    pub total_reps: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseSummary {
    pub exercise: String,
    pub sets: usize,
    pub total_reps: u32,
    pub avg_reps: f64,
    /// Heaviest numeric load across the sets, if any was recorded.
    pub max_weight: Option<f64>,
    pub difficulty: DifficultyTally,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DifficultyTally {
    pub easy: usize,
    pub ok: usize,
    pub hard: usize,
}

impl DifficultyTally {
    fn record(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Ok => self.ok += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.easy == 0 && self.ok == 0 && self.hard == 0
    }
}

/// Summarize one session into per-exercise aggregates.
pub fn summarize(session: &Session) -> SessionSummary {
    let mut exercises = Vec::new();
    let mut total_sets = 0;
    let mut total_reps = 0;

    for log in &session.log {
        let mut tally = DifficultyTally::default();
        let mut reps = 0u32;
        let mut max_weight: Option<f64> = None;

        for set in &log.sets {
            reps += set.reps.unwrap_or(0);
            if let Some(kg) = set.weight {
                max_weight = Some(max_weight.map_or(kg, |m| m.max(kg)));
            }
            if let Some(difficulty) = set.difficulty {
                tally.record(difficulty);
            }
        }

        total_sets += log.sets.len();
        total_reps += reps;

        exercises.push(ExerciseSummary {
            exercise: log.exercise.clone(),
            sets: log.sets.len(),
            total_reps: reps,
            avg_reps: f64::from(reps) / log.sets.len().max(1) as f64,
            max_weight,
            difficulty: tally,
        });
    }

    SessionSummary {
        date: session.date,
        split: session.split,
        exercises,
        total_sets,
        total_reps,
    }
}
