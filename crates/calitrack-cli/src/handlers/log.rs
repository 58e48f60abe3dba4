use crate::config::Config;
use crate::display;
use crate::types::EntrySpec;
use anyhow::{Result, bail};
use calitrack_engine::{AppendMode, SessionLog};
use calitrack_store::SessionStore;
use calitrack_types::{ExerciseLog, Session, Split};
use chrono::{Local, NaiveDate};

pub fn handle(
    log: &mut SessionLog,
    store: &SessionStore,
    config: &Config,
    date: Option<NaiveDate>,
    split: Option<Split>,
    entries: Vec<EntrySpec>,
    replace: bool,
) -> Result<()> {
    let Some(split) = split.or(config.default_split) else {
        bail!("No split given; pass --split or set default_split in config.toml");
    };

    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let session = Session {
        date,
        split,
        log: entries
            .into_iter()
            .map(|entry| ExerciseLog {
                exercise: entry.exercise,
                sets: entry.sets,
            })
            .collect(),
    };

    let exercise_count = session.log.len();
    let set_count = session.set_count();

    let mode = if replace || config.replace_same_day {
        AppendMode::ReplaceSameDateAndSplit
    } else {
        AppendMode::Always
    };

    log.append(session, mode)?;

    // A failed write is a warning, not a rollback: the in-memory log stays
    // authoritative for the rest of the process.
    if let Err(e) = store.save(log.sessions()) {
        eprintln!("Warning: failed to persist sessions: {}", e);
    }

    println!(
        "Logged {} session for {} ({} exercises, {} sets)",
        display::accent(&split.to_string()),
        date,
        exercise_count,
        set_count
    );

    Ok(())
}
