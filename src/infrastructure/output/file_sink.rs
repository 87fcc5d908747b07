//! File output sink adapter

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;

use crate::application::ports::{OutputError, OutputSink};
use crate::domain::prompt::PromptType;

/// Writes each result to `<dir>/<UTC timestamp>_<prompt type>.txt`
pub struct FileOutputSink {
    dir: PathBuf,
}

impl FileOutputSink {
    /// Create a sink writing under `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File name for a result produced at `now`
    fn file_name(now: DateTime<Utc>, prompt_type: PromptType) -> String {
        format!("{}_{}.txt", now.format("%Y%m%dT%H%M%SZ"), prompt_type)
    }
}

#[async_trait]
impl OutputSink for FileOutputSink {
    async fn save(&self, text: &str, prompt_type: PromptType) -> Result<PathBuf, OutputError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| OutputError::CreateDir {
                path: self.dir.display().to_string(),
                message: e.to_string(),
            })?;

        let path = self.dir.join(Self::file_name(Utc::now(), prompt_type));

        fs::write(&path, text)
            .await
            .map_err(|e| OutputError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        log::debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }
}
