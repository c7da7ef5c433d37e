use std::time::Duration;

use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use url::Url;

use super::{parse_payload, RecordSource, SourceError};

pub struct HttpSource {
    http: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("repo-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, url })
    }
}

impl RecordSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Value>, SourceError> {
        log::debug!("fetching repos from {}", self.url);
        let response = self
            .http
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body = response.bytes().await?;
        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
