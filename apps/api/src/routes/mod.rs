pub mod health;
pub mod jobs;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/api/jobs", get(jobs::jobs_handler))
        .with_state(state)
}
