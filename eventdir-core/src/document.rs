//! Whole-file JSON documents.
//!
//! A document is read in full on every load and rewritten in full on every
//! save. Saves go through a temp file and a rename so a concurrent reader
//! sees either the old document or the new one.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::EventDirResult;

pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonDocument {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> EventDirResult<T> {
        let content = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&content)?)
    }

    pub async fn save(&self, value: &T) -> EventDirResult<()> {
        let mut content = serde_json::to_vec_pretty(value)?;
        content.push(b'\n');

        let temp = self.temp_path();
        tokio::fs::write(&temp, &content).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), bytes = content.len(), "document saved");
        Ok(())
    }

    /// Write `default` if the document does not exist yet.
    /// Returns true if the file was created.
    pub async fn ensure_exists(&self, default: &T) -> EventDirResult<bool> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        self.save(default).await?;

        tracing::info!(path = %self.path.display(), "created empty document");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
