use std::{convert::Infallible, fmt, future::Future, path::PathBuf, str::FromStr};

use serde_json::Value;
use thiserror::Error;
use url::Url;

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::StaticSource;

pub const DEFAULT_UPSTREAM_URL: &str =
    "https://raw.githubusercontent.com/asiakay/repo-dashboard/main/public/data/repos.json";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is not a JSON array (got {0})")]
    UnexpectedShape(&'static str),
}

/// Anything that can produce the raw repository array.
///
/// Records are returned untouched so the proxy can pass them through as-is;
/// the controller does its own per-field parsing.
pub trait RecordSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Value>, SourceError>> + Send;
    fn describe(&self) -> String;
}

/// Where the CLI reads repositories from: an http(s) URL or a local file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    Url(Url),
    File(PathBuf),
}

impl FromStr for SourceLocation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(SourceLocation::Url(url)),
            _ => Ok(SourceLocation::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{}", url),
            SourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Source chosen at runtime from a [`SourceLocation`].
pub enum AnySource {
    Http(HttpSource),
    File(FileSource),
}

impl AnySource {
    pub fn open(location: &SourceLocation, timeout: std::time::Duration) -> Result<Self, SourceError> {
        Ok(match location {
            SourceLocation::Url(url) => AnySource::Http(HttpSource::new(url.clone(), timeout)?),
            SourceLocation::File(path) => AnySource::File(FileSource::new(path.clone())),
        })
    }
}

impl RecordSource for AnySource {
    async fn fetch(&self) -> Result<Vec<Value>, SourceError> {
        match self {
            AnySource::Http(source) => source.fetch().await,
            AnySource::File(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            AnySource::Http(source) => source.describe(),
            AnySource::File(source) => source.describe(),
        }
    }
}

pub fn parse_payload(bytes: &[u8]) -> Result<Vec<Value>, SourceError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(items) => Ok(items),
        other => {
            let kind = json_kind(&other);
            log::warn!("expected repos payload to be an array, got {}", kind);
            Err(SourceError::UnexpectedShape(kind))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_payload_accepts_arrays() {
        let items = parse_payload(br#"[{"name":"a"},{"name":"b"}]"#).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn parse_payload_rejects_objects() {
        let err = parse_payload(br#"{"repos":[]}"#).unwrap_err();
        assert!(matches!(err, SourceError::UnexpectedShape("object")));
    }

    #[test]
    fn parse_payload_reports_bad_json() {
        let err = parse_payload(b"<html>").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn location_distinguishes_urls_from_paths() {
        assert!(matches!(
            "https://example.com/repos.json".parse::<SourceLocation>(),
            Ok(SourceLocation::Url(_))
        ));
        assert_eq!(
            "public/data/repos.json".parse::<SourceLocation>().unwrap(),
            SourceLocation::File(PathBuf::from("public/data/repos.json"))
        );
    }
}
