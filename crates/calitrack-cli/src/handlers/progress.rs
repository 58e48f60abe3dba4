use crate::config::Config;
use crate::display;
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use calitrack_engine::{SessionLog, TimeRange, group_by_exercise};
use calitrack_types::Split;
use chrono::Local;

pub fn handle(
    log: &SessionLog,
    config: &Config,
    split: Option<Split>,
    range: TimeRange,
    exercises: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let Some(split) = split.or(config.default_split) else {
        bail!("No split given; pass --split or set default_split in config.toml");
    };

    let today = Local::now().date_naive();
    let sessions = log.filter_by_split_and_window(split, range.days(), today);

    let filter = (!exercises.is_empty()).then_some(exercises.as_slice());
    let series = group_by_exercise(&sessions, filter);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    if series.is_empty() {
        println!("No sessions match this selection yet.");
        return Ok(());
    }

    println!(
        "{} {}",
        display::header(&format!("{} progress", split)),
        display::dim(&format!("(last {})", range))
    );

    for progress in &series {
        println!();
        println!("{}", display::accent(&progress.exercise));
        for point in &progress.points {
            println!(
                "  {}   avg reps {:>5.1}   avg weight {:>5.1} kg",
                point.date, point.avg_reps, point.avg_weight
            );
        }
    }

    Ok(())
}
