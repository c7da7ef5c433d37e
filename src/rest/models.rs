use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

/// Upstream records wrapped with their count; records pass through as-is.
#[derive(Serialize, Deserialize)]
pub struct ReposResponse {
    pub count: usize,
    pub repos: Vec<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
