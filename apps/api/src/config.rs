use anyhow::{Context, Result};

/// Frontend origins allowed to call this API from a browser, unless
/// overridden via `ALLOWED_ORIGINS`.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://mindpath-ebc2144.netlify.app",
    "https://mindpath-quiz.netlify.app",
    "https://mindpath-r0ru.onrender.com",
];

/// Application configuration loaded from environment variables.
///
/// The upstream credential is deliberately optional: without it the service
/// still starts and serves requests, and the jobs path returns empty results.
#[derive(Debug, Clone)]
pub struct Config {
    pub theirstack_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            theirstack_api_key: optional_env("THEIRSTACK_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_else(|_| {
                    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
                }),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
