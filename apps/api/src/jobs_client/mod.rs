/// TheirStack client: the single point of entry for outbound job-search calls.
///
/// ARCHITECTURAL RULE: No other module may call the TheirStack API directly.
/// Handlers depend on the [`JobSearch`] trait carried in `AppState`, never on
/// the concrete client, so tests can drop in a stub backend.
///
/// Failure policy: swallow and degrade. Any upstream problem (no credential,
/// network error, non-2xx status, malformed body) is logged and collapses to
/// an empty result list; nothing past this boundary ever sees the failure.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::models::Job;

const THEIRSTACK_API_URL: &str = "https://api.theirstack.com/v1/jobs/search";
/// Maximum age of postings requested from the upstream, in days.
const MAX_POSTING_AGE_DAYS: u32 = 45;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The job-search seam. Carried in `AppState` as `Arc<dyn JobSearch>`.
///
/// Implementations never fail past this boundary; degraded backends return
/// an empty list.
#[async_trait]
pub trait JobSearch: Send + Sync {
    async fn search(&self, keywords: &[String], limit: u32) -> Vec<Job>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    posted_at_max_age_days: u32,
    limit: u32,
    job_title_or: &'a [String],
    include_total_results: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<RawJob>,
}

/// One record as the upstream sends it. Every field is optional; the
/// normalizer substitutes fallbacks.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJob {
    id: Option<Value>,
    job_title: Option<String>,
    url: Option<String>,
    salary_string: Option<String>,
    date_posted: Option<String>,
    job_location_names: Option<Vec<String>>,
    company_object: Option<CompanyObject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CompanyObject {
    name: Option<String>,
}

/// HTTP client for the TheirStack job-search API.
#[derive(Clone)]
pub struct TheirStackClient {
    client: Client,
    api_key: Option<String>,
    search_url: String,
}

impl TheirStackClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_search_url(api_key, THEIRSTACK_API_URL.to_string())
    }

    /// Points the client at a non-default search URL. Used by tests to target
    /// a local mock server.
    pub fn with_search_url(api_key: Option<String>, search_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            search_url,
        }
    }

    /// Makes one call to the search endpoint. No retries; the caller decides
    /// what a failure means.
    async fn try_search(
        &self,
        api_key: &str,
        keywords: &[String],
        limit: u32,
    ) -> Result<Vec<Job>, SearchError> {
        let request_body = SearchRequest {
            posted_at_max_age_days: MAX_POSTING_AGE_DAYS,
            limit,
            job_title_or: keywords,
            include_total_results: false,
        };

        let response = self
            .client
            .post(&self.search_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("TheirStack returned {} raw records", body.data.len());

        Ok(body.data.into_iter().map(normalize).collect())
    }
}

#[async_trait]
impl JobSearch for TheirStackClient {
    async fn search(&self, keywords: &[String], limit: u32) -> Vec<Job> {
        let Some(api_key) = self.api_key.clone() else {
            warn!("No THEIRSTACK_API_KEY configured; skipping search and returning no results");
            return Vec::new();
        };

        match self.try_search(&api_key, keywords, limit).await {
            Ok(jobs) => jobs,
            Err(e) => {
                error!("Error fetching jobs: {e}");
                Vec::new()
            }
        }
    }
}

/// Collapses a raw upstream record into the fixed output shape.
fn normalize(raw: RawJob) -> Job {
    let location = raw
        .job_location_names
        .as_ref()
        .and_then(|names| names.first())
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());

    let company = raw
        .company_object
        .and_then(|c| c.name)
        .unwrap_or_else(|| "Unknown Company".to_string());

    Job {
        id: coerce_id(raw.id),
        title: raw.job_title.unwrap_or_else(|| "Untitled Role".to_string()),
        company,
        location,
        url: raw.url.unwrap_or_else(|| "#".to_string()),
        salary_string: Some(raw.salary_string.unwrap_or_else(|| "Not listed".to_string())),
        date_posted: Some(raw.date_posted.unwrap_or_default()),
    }
}

/// The upstream id is numeric; the frontend expects a string.
fn coerce_id(id: Option<Value>) -> String {
    match id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => "0".to_string(),
    }
}
