use serde::Serialize;

/// A normalized job posting as returned to the frontend.
///
/// Upstream records are heterogeneous; every field here is filled with a
/// defined fallback when the source omits it, so the frontend never has to
/// null-check anything beyond the two optional display fields.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    /// Upstream id coerced to a string (the source sends a number).
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub salary_string: Option<String>,
    pub date_posted: Option<String>,
}
