use crate::display;
use crate::types::OutputFormat;
use anyhow::Result;
use calitrack_engine::{DifficultyTally, SessionLog, summarize};
use calitrack_types::{Session, Split};
use chrono::NaiveDate;

pub fn handle(
    log: &SessionLog,
    date: Option<NaiveDate>,
    split: Option<Split>,
    format: OutputFormat,
) -> Result<()> {
    let Some(session) = select_session(log, date, split) else {
        if format == OutputFormat::Json {
            println!("null");
        } else {
            println!("No matching session found.");
        }
        return Ok(());
    };

    let summary = summarize(session);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} — {}, {}",
        display::header("Session summary"),
        display::accent(&summary.split.to_string()),
        summary.date
    );
    println!();

    for exercise in &summary.exercises {
        let mut line = format!(
            "  {:<32} {} sets, {} reps (avg {:.1})",
            exercise.exercise, exercise.sets, exercise.total_reps, exercise.avg_reps
        );
        if let Some(kg) = exercise.max_weight {
            line.push_str(&format!(", max {} kg", kg));
        }
        if let Some(tally) = format_tally(&exercise.difficulty) {
            line.push_str(&format!("  {}", display::dim(&tally)));
        }
        println!("{}", line);
    }

    println!();
    println!(
        "  Total: {} sets, {} reps",
        summary.total_sets, summary.total_reps
    );

    Ok(())
}

/// Latest session matching the optional date/split filters; ties on date go
/// to the latest inserted, same as the last-entry lookup.
fn select_session<'a>(
    log: &'a SessionLog,
    date: Option<NaiveDate>,
    split: Option<Split>,
) -> Option<&'a Session> {
    let mut best: Option<&Session> = None;
    for session in log.sessions() {
        if date.is_some_and(|d| session.date != d) {
            continue;
        }
        if split.is_some_and(|s| session.split != s) {
            continue;
        }
        match best {
            Some(current) if current.date > session.date => {}
            _ => best = Some(session),
        }
    }
    best
}

fn format_tally(tally: &DifficultyTally) -> Option<String> {
    if tally.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if tally.easy > 0 {
        parts.push(format!("{} Easy", tally.easy));
    }
    if tally.ok > 0 {
        parts.push(format!("{} OK", tally.ok));
    }
    if tally.hard > 0 {
        parts.push(format!("{} Hard", tally.hard));
    }
    Some(parts.join(" / "))
}
