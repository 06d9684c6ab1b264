use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing is required: a missing API key is reported per generation call,
/// not at startup, so the compose preview and exports keep working without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub generation_api_key: Option<String>,
    /// Overrides the Gemini base URL (proxies, local fakes).
    pub generation_api_base: Option<String>,
    /// Optional caller-side bound on one generation call. Unset = wait.
    pub generation_timeout_secs: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generation_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            generation_api_base: optional_env("GENERATION_API_BASE"),
            generation_timeout_secs: optional_env("GENERATION_TIMEOUT_SECS")
                .map(|v| {
                    v.parse::<u64>()
                        .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
