//! Discovery dossier writer — the completion handoff target.
//!
//! A finalized answer record becomes a timestamped JSON file for the sales
//! team to review. This is the whole "execution layer" today.

use std::path::{Path, PathBuf};

use crate::error::DossierError;
use crate::interview::OnboardData;

/// Writes finalized answer records as timestamped JSON dossiers.
#[derive(Debug, Clone)]
pub struct DossierWriter {
    dir: PathBuf,
}

impl DossierWriter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory dossiers are written under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `record` as `dossier_{company_slug}_{timestamp}.json`, creating
    /// the directory if needed. Returns the path of the written file.
    pub async fn write(&self, record: &OnboardData) -> Result<PathBuf, DossierError> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("dossier_{}_{}.json", record.company_slug(), timestamp);
        let path = self.dir.join(filename);

        let json = serde_json::to_vec_pretty(record)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| DossierError::Io {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| DossierError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "dossier created");
        Ok(path)
    }
}
