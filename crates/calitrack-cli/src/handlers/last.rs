use crate::display;
use crate::types::OutputFormat;
use anyhow::Result;
use calitrack_engine::SessionLog;
use calitrack_types::{SetEntry, Split};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LastEntry<'a> {
    exercise: &'a str,
    split: Split,
    date: NaiveDate,
    sets: &'a [SetEntry],
}

pub fn handle(log: &SessionLog, split: Split, exercise: &str, format: OutputFormat) -> Result<()> {
    let Some((session, entry)) = log.most_recent(split, exercise) else {
        if format == OutputFormat::Json {
            println!("null");
        } else {
            println!("No {} session with {} logged yet.", split, exercise);
        }
        return Ok(());
    };

    if format == OutputFormat::Json {
        let payload = LastEntry {
            exercise,
            split,
            date: session.date,
            sets: &entry.sets,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!(
        "{} — last logged {} {}",
        display::header(exercise),
        session.date,
        display::dim(&format!(
            "({})",
            display::format_relative_date(session.date, today)
        ))
    );
    for (i, set) in entry.sets.iter().enumerate() {
        println!("  set {}: {}", i + 1, display::format_set(set));
    }

    Ok(())
}
