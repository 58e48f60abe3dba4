use crate::display;
use crate::types::OutputFormat;
use anyhow::Result;
use calitrack_engine::{SessionLog, TimeRange};
use calitrack_types::{Session, Split};
use chrono::Local;

pub fn handle(
    log: &SessionLog,
    split: Option<Split>,
    range: Option<TimeRange>,
    format: OutputFormat,
) -> Result<()> {
    let today = Local::now().date_naive();

    let sessions: Vec<Session> = match (split, range) {
        (Some(split), Some(range)) => {
            log.filter_by_split_and_window(split, range.days(), today)
        }
        (Some(split), None) => log
            .sessions()
            .iter()
            .filter(|s| s.split == split)
            .cloned()
            .collect(),
        (None, Some(range)) => log
            .sessions()
            .iter()
            .filter(|s| (today - s.date).num_days() <= range.days())
            .cloned()
            .collect(),
        (None, None) => log.sessions().to_vec(),
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    if sessions.is_empty() {
        println!("No sessions match this selection yet.");
        return Ok(());
    }

    for session in &sessions {
        let exercises = session.log.len();
        println!(
            "{}  {:<18} {} exercises, {} sets  {}",
            session.date,
            display::accent(&session.split.to_string()),
            exercises,
            session.set_count(),
            display::dim(&format!(
                "({})",
                display::format_relative_date(session.date, today)
            ))
        );
    }

    Ok(())
}
