use calitrack_types::{Band, Difficulty, Session, Split};
use chrono::NaiveDate;
use serde::Serialize;

/// One flattened (session, exercise, set) row for CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub split: Split,
    pub exercise: String,
    /// 1-based set position within the exercise.
    pub set: usize,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub band: Option<Band>,
    pub difficulty: Option<Difficulty>,
}

/// Flatten every set in every session into export rows, preserving session,
/// exercise, and set order.
pub fn export_rows(sessions: &[Session]) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for session in sessions {
        for log in &session.log {
            for (i, set) in log.sets.iter().enumerate() {
                rows.push(ExportRow {
                    date: session.date,
                    split: session.split,
                    exercise: log.exercise.clone(),
                    set: i + 1,
                    reps: set.reps,
                    weight: set.weight,
                    band: set.band,
                    difficulty: set.difficulty,
                });
            }
        }
    }

    rows
}
