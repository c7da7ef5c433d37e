use std::path::PathBuf;

use serde_json::Value;

use super::{parse_payload, RecordSource, SourceError};

/// Reads the static `repos.json` the site is built from.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Value>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_payload(&bytes)
    }

    fn describe(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
