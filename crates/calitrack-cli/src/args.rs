use crate::types::{EntrySpec, OutputFormat};
use calitrack_engine::TimeRange;
use calitrack_types::Split;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calitrack")]
#[command(about = "Log and analyze calisthenics workouts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory override")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a workout session
    Log {
        #[arg(long, help = "Session date (YYYY-MM-DD, defaults to today)")]
        date: Option<NaiveDate>,

        #[arg(long, help = "Workout split: push, pull, legs, skills")]
        split: Option<Split>,

        #[arg(
            long = "entry",
            value_name = "EXERCISE=SETS",
            help = "Exercise entry, e.g. \"Dips=8@10kg,8@10kg:hard\" (set grammar: reps[@kg|band][:difficulty])"
        )]
        entries: Vec<EntrySpec>,

        #[arg(long, help = "Overwrite any session already logged for this date and split")]
        replace: bool,
    },

    /// List logged sessions
    Sessions {
        #[arg(long)]
        split: Option<Split>,

        #[arg(long, help = "Time window: 1m, 3m, 6m, 1y, or a day count")]
        range: Option<TimeRange>,
    },

    /// Show the exercise catalog for a split
    Exercises {
        #[arg(long)]
        split: Split,
    },

    /// Show the last logged sets for an exercise
    Last {
        #[arg(long)]
        split: Split,

        #[arg(long)]
        exercise: String,
    },

    /// Per-exercise progress series (date, avg reps, avg weight)
    Progress {
        #[arg(long)]
        split: Option<Split>,

        #[arg(long, default_value = "3m")]
        range: TimeRange,

        #[arg(long = "exercise", help = "Restrict to these exercises (repeatable)")]
        exercises: Vec<String>,
    },

    /// Recap of one session
    Summary {
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        split: Option<Split>,
    },

    /// Export every logged set as CSV
    Export {
        #[arg(long, help = "Output file (stdout when omitted)")]
        output: Option<PathBuf>,
    },

    /// Rest countdown between sets
    Timer {
        #[arg(value_name = "SECONDS")]
        seconds: Option<u64>,
    },
}
