use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Returns a simple status object confirming the backend is up.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "MindPath Backend is running",
        "service": "mindpath-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
