use crate::display;
use crate::types::OutputFormat;
use anyhow::Result;
use calitrack_engine::SessionLog;
use calitrack_types::{Split, exercises_for};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ExerciseRow {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommended: Option<String>,
    logged: bool,
}

pub fn handle(log: &SessionLog, split: Split, format: OutputFormat) -> Result<()> {
    let logged = log.exercises_logged_for(split);

    let mut rows: Vec<ExerciseRow> = exercises_for(split)
        .iter()
        .map(|entry| ExerciseRow {
            name: entry.name.to_string(),
            recommended: Some(entry.recommended()),
            logged: logged.iter().any(|name| name == entry.name),
        })
        .collect();

    // Names logged under this split that the catalog doesn't know about
    // (free-form entries, older spellings) still belong in the picker.
    for name in logged {
        if !rows.iter().any(|row| row.name == name) {
            rows.push(ExerciseRow {
                name,
                recommended: None,
                logged: true,
            });
        }
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", display::header(&format!("{} exercises", split)));
    println!();
    for row in &rows {
        let recommended = row.recommended.as_deref().unwrap_or("-");
        let marker = if row.logged {
            display::accent("logged")
        } else {
            String::new()
        };
        println!("  {:<32} {:>6}  {}", row.name, recommended, marker);
    }

    Ok(())
}
