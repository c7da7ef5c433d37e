use serde_json::Value;

use super::{json_kind, RecordSource, SourceError};

/// In-memory payload, handy for tests and for embedding a snapshot.
#[derive(Clone, Debug)]
pub struct StaticSource {
    payload: Value,
}

impl StaticSource {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

impl RecordSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Value>, SourceError> {
        match &self.payload {
            Value::Array(items) => Ok(items.clone()),
            other => Err(SourceError::UnexpectedShape(json_kind(other))),
        }
    }

    fn describe(&self) -> String {
        "static payload".to_string()
    }
}
