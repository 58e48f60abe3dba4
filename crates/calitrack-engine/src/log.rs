use calitrack_types::{ExerciseLog, Session, Split};
use chrono::NaiveDate;
use std::collections::HashSet;

use crate::error::{Error, Result};

/// How `append` treats an existing session with the same (date, split).
///
/// The source drafts disagreed on this, so both policies are exposed and the
/// caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendMode {
    /// Add unconditionally; duplicates per day are allowed.
    Always,
    /// Re-logging a day's workout overwrites that day's workout: every
    /// session with the same (date, split) is removed first.
    ReplaceSameDateAndSplit,
}

/// The collection of all logged sessions, in insertion order.
///
/// Single logical owner, single-threaded mutation: `append` is the only
/// operation that changes the collection, every query is read-only.
/// Persistence is the store's concern; the log itself is purely in-memory.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    sessions: Vec<Session>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the log from a previously persisted collection.
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Append a session under the given mode.
    ///
    /// Fails with `Error::EmptySession` (collection unchanged) when no
    /// exercise has a single non-empty set.
    pub fn append(&mut self, session: Session, mode: AppendMode) -> Result<()> {
        if session.is_empty() {
            return Err(Error::EmptySession);
        }

        if mode == AppendMode::ReplaceSameDateAndSplit {
            self.sessions
                .retain(|s| !(s.date == session.date && s.split == session.split));
        }

        self.sessions.push(session);
        Ok(())
    }

    /// Sessions of one split whose date falls within the last `window_days`
    /// of `now` (inclusive), re-sorted into ascending date order.
    ///
    /// Input order is not assumed sorted; the sort is stable, so sessions on
    /// the same day keep their insertion order.
    pub fn filter_by_split_and_window(
        &self,
        split: Split,
        window_days: i64,
        now: NaiveDate,
    ) -> Vec<Session> {
        let mut matched: Vec<Session> = self
            .sessions
            .iter()
            .filter(|s| s.split == split && (now - s.date).num_days() <= window_days)
            .cloned()
            .collect();
        matched.sort_by_key(|s| s.date);
        matched
    }

    /// Every exercise name ever logged under a split, in discovery order.
    pub fn exercises_logged_for(&self, split: Split) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for session in self.sessions.iter().filter(|s| s.split == split) {
            for log in &session.log {
                if seen.insert(log.exercise.clone()) {
                    names.push(log.exercise.clone());
                }
            }
        }
        names
    }

    /// The most recent session of a split that contains the exercise,
    /// together with its log for that exercise.
    ///
    /// Maximum date wins; ties go to the latest inserted session.
    pub fn most_recent(&self, split: Split, exercise: &str) -> Option<(&Session, &ExerciseLog)> {
        let mut best: Option<(&Session, &ExerciseLog)> = None;
        for session in &self.sessions {
            if session.split != split {
                continue;
            }
            let Some(log) = session.exercise(exercise) else {
                continue;
            };
            match best {
                Some((current, _)) if current.date > session.date => {}
                _ => best = Some((session, log)),
            }
        }
        best
    }

    /// The sets last logged for an exercise under a split, if any.
    pub fn most_recent_entry(&self, split: Split, exercise: &str) -> Option<&ExerciseLog> {
        self.most_recent(split, exercise).map(|(_, log)| log)
    }
}
