use anyhow::{Context, Result};
use calitrack_engine::{SessionLog, export_rows};
use std::path::PathBuf;

pub fn handle(log: &SessionLog, output: Option<PathBuf>) -> Result<()> {
    let rows = export_rows(log.sessions());

    match output {
        Some(path) => {
            let mut writer = csv::Writer::from_path(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            println!("Exported {} sets to {}", rows.len(), path.display());
        }
        None => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}
