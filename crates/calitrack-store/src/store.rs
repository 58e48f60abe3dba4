use calitrack_types::Session;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Persists the whole session collection as one JSON document.
///
/// The store is deliberately dumb: `load` and `save` move the entire
/// collection, mirroring the single storage slot the original trackers kept
/// their sessions under. In-memory state stays authoritative; a failed save
/// is reported to the caller and never rolls anything back.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("sessions.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection. A missing file is an empty log, not an
    /// error.
    pub fn load(&self) -> Result<Vec<Session>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the collection, creating the data directory if needed.
    pub fn save(&self, sessions: &[Session]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(sessions)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
