use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::keywords::keywords_for_code;
use crate::models::Job;
use crate::state::AppState;

/// Default number of postings returned when the caller does not ask for a
/// specific amount.
const DEFAULT_LIMIT: u32 = 4;

#[derive(Deserialize)]
pub struct JobsQuery {
    pub code: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// GET /api/jobs?code=IAS&limit=4
///
/// Maps the RIASEC code to job-title keywords and queries the configured
/// search backend. Upstream trouble never surfaces here; the backend
/// degrades to an empty list, so this handler only fails on an empty `code`.
pub async fn jobs_handler(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    if params.code.is_empty() {
        return Err(AppError::Validation(
            "query parameter 'code' must not be empty".to_string(),
        ));
    }

    info!("Fetching jobs for RIASEC code: {}", params.code);

    let keywords = keywords_for_code(&params.code);
    info!("Search keywords: {keywords:?}");

    let jobs = state.jobs.search(&keywords, params.limit).await;
    Ok(Json(jobs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::config::Config;
    use crate::jobs_client::JobSearch;
    use crate::routes::build_router;
    use crate::state::AppState;

    /// Stub backend that returns canned jobs and records every call.
    struct StubSearch {
        jobs: Vec<Job>,
        calls: Mutex<Vec<(Vec<String>, u32)>>,
    }

    impl StubSearch {
        fn new(jobs: Vec<Job>) -> Self {
            Self {
                jobs,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl JobSearch for StubSearch {
        async fn search(&self, keywords: &[String], limit: u32) -> Vec<Job> {
            self.calls
                .lock()
                .unwrap()
                .push((keywords.to_vec(), limit));
            self.jobs.clone()
        }
    }

    fn test_config() -> Config {
        Config {
            theirstack_api_key: None,
            port: 0,
            rust_log: "info".to_string(),
            allowed_origins: Vec::new(),
        }
    }

    fn sample_job() -> Job {
        Job {
            id: "4221".to_string(),
            title: "Data Scientist".to_string(),
            company: "Acme Analytics".to_string(),
            location: "Berlin, Germany".to_string(),
            url: "https://example.com/jobs/4221".to_string(),
            salary_string: Some("Not listed".to_string()),
            date_posted: Some("".to_string()),
        }
    }

    async fn get(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_jobs_endpoint_returns_backend_records() {
        let backend = Arc::new(StubSearch::new(vec![sample_job()]));
        let router = build_router(AppState {
            jobs: backend.clone(),
            config: test_config(),
        });

        let (status, body) = get(router, "/api/jobs?code=IA").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "4221");
        assert_eq!(body[0]["company"], "Acme Analytics");

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (keywords, limit) = &calls[0];
        assert_eq!(*limit, DEFAULT_LIMIT);
        assert!(keywords.contains(&"Data Scientist".to_string()));
        assert!(keywords.contains(&"Graphic Designer".to_string()));
    }

    #[tokio::test]
    async fn test_explicit_limit_is_forwarded() {
        let backend = Arc::new(StubSearch::new(Vec::new()));
        let router = build_router(AppState {
            jobs: backend.clone(),
            config: test_config(),
        });

        let (status, body) = get(router, "/api/jobs?code=R&limit=9").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
        assert_eq!(backend.calls.lock().unwrap()[0].1, 9);
    }

    #[tokio::test]
    async fn test_missing_code_is_rejected() {
        let backend = Arc::new(StubSearch::new(Vec::new()));
        let router = build_router(AppState {
            jobs: backend.clone(),
            config: test_config(),
        });

        let (status, _) = get(router, "/api/jobs").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_code_is_rejected() {
        let backend = Arc::new(StubSearch::new(Vec::new()));
        let router = build_router(AppState {
            jobs: backend.clone(),
            config: test_config(),
        });

        let (status, body) = get(router, "/api/jobs?code=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let router = build_router(AppState {
            jobs: Arc::new(StubSearch::new(Vec::new())),
            config: test_config(),
        });

        let (status, body) = get(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "MindPath Backend is running");
    }
}
