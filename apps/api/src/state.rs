use std::sync::Arc;

use crate::config::Config;
use crate::jobs_client::JobSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job-search backend. Default: TheirStackClient. Swapped for a
    /// stub in handler tests.
    pub jobs: Arc<dyn JobSearch>,
    pub config: Config,
}
