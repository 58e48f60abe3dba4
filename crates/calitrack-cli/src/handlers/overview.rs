use crate::display;
use anyhow::Result;
use calitrack_engine::SessionLog;
use calitrack_types::{Session, Split};
use chrono::Local;

/// Bare `calitrack` with no subcommand: a quick status plus pointers.
pub fn handle(log: &SessionLog) -> Result<()> {
    println!("calitrack - Calisthenics workout log");
    println!();

    if log.is_empty() {
        println!("No sessions logged yet.");
        println!();
        println!("Log your first workout:");
        println!("  calitrack log --split push --entry \"Dips=8@10kg,8@10kg:hard\"");
        println!();
        println!("Then check your progress:");
        println!("  calitrack progress --split push --range 3m");
        return Ok(());
    }

    let counts: Vec<String> = Split::all()
        .into_iter()
        .map(|split| {
            let n = log.sessions().iter().filter(|s| s.split == split).count();
            format!("{} {}", n, split)
        })
        .collect();

    println!("  {} sessions logged ({})", log.len(), counts.join(" / "));

    if let Some(last) = latest_session(log) {
        let today = Local::now().date_naive();
        println!(
            "  Last session: {} on {} {}",
            display::accent(&last.split.to_string()),
            last.date,
            display::dim(&format!(
                "({})",
                display::format_relative_date(last.date, today)
            ))
        );
    }

    println!();
    println!("Commands: log, sessions, exercises, last, progress, summary, export, timer");
    println!("Run 'calitrack help' for details.");

    Ok(())
}

fn latest_session(log: &SessionLog) -> Option<&Session> {
    let mut best: Option<&Session> = None;
    for session in log.sessions() {
        match best {
            Some(current) if current.date > session.date => {}
            _ => best = Some(session),
        }
    }
    best
}
