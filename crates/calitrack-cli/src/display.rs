use calitrack_types::{Resistance, SetEntry};
use chrono::NaiveDate;
use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;

static STDOUT_TTY: Lazy<bool> = Lazy::new(|| std::io::stdout().is_terminal());

pub fn color_enabled() -> bool {
    *STDOUT_TTY
}

pub fn header(text: &str) -> String {
    if color_enabled() {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if color_enabled() {
        format!("{}", text.bright_black())
    } else {
        text.to_string()
    }
}

pub fn accent(text: &str) -> String {
    if color_enabled() {
        format!("{}", text.cyan())
    } else {
        text.to_string()
    }
}

/// Format a date as relative time (e.g. "today", "3 days ago")
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();

    if days < 0 {
        date.to_string()
    } else if days == 0 {
        "today".to_string()
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{} weeks ago", weeks)
        }
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "1 month ago".to_string()
        } else {
            format!("{} months ago", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "1 year ago".to_string()
        } else {
            format!("{} years ago", years)
        }
    }
}

/// One-line rendering of a set, e.g. "8 reps @ 10 kg (Hard)"
pub fn format_set(set: &SetEntry) -> String {
    let mut line = match set.reps {
        Some(reps) => format!("{} reps", reps),
        None => "- reps".to_string(),
    };

    match set.resistance() {
        Resistance::None => {}
        resistance => {
            line.push_str(&format!(" @ {}", resistance));
        }
    }

    if let Some(difficulty) = set.difficulty {
        line.push_str(&format!(" ({})", difficulty));
    }

    line
}
