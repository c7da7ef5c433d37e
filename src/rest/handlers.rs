use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::source::RecordSource;

use super::{
    models::{ErrorResponse, HealthResponse, ReposResponse},
    AppState,
};

pub async fn health<S: RecordSource + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            uptime_secs,
        }),
    )
}

pub async fn list_repos<S: RecordSource + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    match state.source.fetch().await {
        Ok(repos) => {
            log::debug!("serving {} repos", repos.len());
            Json(ReposResponse {
                count: repos.len(),
                repos,
            })
            .into_response()
        }
        Err(err) => {
            log::error!(
                "Failed to fetch repos from {}: {}",
                state.source.describe(),
                err
            );
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    message: format!("failed to fetch repositories: {}", err),
                }),
            )
                .into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "endpoint not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::rest::{models::ErrorResponse, models::ReposResponse, router};
    use crate::source::{RecordSource, SourceError, StaticSource};

    struct DownSource;

    impl RecordSource for DownSource {
        async fn fetch(&self) -> Result<Vec<Value>, SourceError> {
            Err(SourceError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        }

        fn describe(&self) -> String {
            "down".to_string()
        }
    }

    async fn issue_get<S: RecordSource + Send + Sync + 'static>(
        source: S,
        uri: &str,
    ) -> axum::response::Response {
        router(Arc::new(source))
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method("GET")
                    .header(header::ORIGIN, "https://dashboard.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn list_repos_wraps_upstream_array() {
        let source = StaticSource::new(json!([
            {"name": "alpha", "health": "green", "extra": {"kept": true}},
            {"name": "beta"}
        ]));
        let response = issue_get(source, "/api/repos").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let payload: ReposResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(payload.count, 2);
        assert_eq!(payload.repos[0]["extra"]["kept"], true);
    }

    #[tokio::test]
    async fn list_repos_returns_bad_gateway_when_upstream_fails() {
        let response = issue_get(DownSource, "/api/repos").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let payload: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(payload.message.contains("503"));
    }

    #[tokio::test]
    async fn list_repos_rejects_non_array_upstream() {
        let response = issue_get(StaticSource::new(json!({"repos": []})), "/api/repos").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = issue_get(StaticSource::new(json!([])), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(payload["status"], "ok");
        assert!(payload["uptime_secs"].is_u64());
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let response = issue_get(StaticSource::new(json!([])), "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(payload.message, "endpoint not found");
    }
}
