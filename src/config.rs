use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const MODEL_CHOICES: [&str; 2] = ["gpt-3.5-turbo", "gpt-4-turbo"];
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{key}' has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables
/// (and a `.env` file when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,

    /// Keys found in the environment; sidebar input overrides them per session.
    pub firecrawl_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub default_model: String,

    pub firecrawl_base_url: String,
    pub openai_base_url: String,
    pub nominatim_base_url: String,

    pub saved_searches_path: PathBuf,
    pub session_ttl: Duration,
    pub http_timeout: Duration,
    pub extract_poll_interval: Duration,
    pub extract_max_polls: u32,

    /// Ask the model for JSON (summary + rows) instead of markdown prose.
    pub structured_summaries: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            firecrawl_api_key: None,
            openai_api_key: None,
            default_model: DEFAULT_MODEL.to_string(),
            firecrawl_base_url: "https://api.firecrawl.dev".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
            saved_searches_path: PathBuf::from("saved_searches.txt"),
            session_ttl: Duration::from_secs(60 * 60 * 24),
            http_timeout: Duration::from_secs(120),
            extract_poll_interval: Duration::from_secs(2),
            extract_max_polls: 60,
            structured_summaries: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();

        let default_model = optional_env("OPENAI_MODEL_ID")
            .filter(|m| MODEL_CHOICES.contains(&m.as_str()))
            .unwrap_or(defaults.default_model);

        Ok(Self {
            bind_addr: parse_env("BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_env("MAX_WORKERS", defaults.max_workers)?,
            firecrawl_api_key: optional_env("FIRECRAWL_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            default_model,
            firecrawl_base_url: optional_env("FIRECRAWL_BASE_URL")
                .unwrap_or(defaults.firecrawl_base_url),
            openai_base_url: optional_env("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            nominatim_base_url: optional_env("NOMINATIM_BASE_URL")
                .unwrap_or(defaults.nominatim_base_url),
            saved_searches_path: optional_env("SAVED_SEARCHES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.saved_searches_path),
            session_ttl: Duration::from_secs(parse_env(
                "SESSION_TTL_SECS",
                defaults.session_ttl.as_secs(),
            )?),
            http_timeout: Duration::from_secs(parse_env(
                "HTTP_TIMEOUT_SECS",
                defaults.http_timeout.as_secs(),
            )?),
            extract_poll_interval: Duration::from_secs(parse_env(
                "EXTRACT_POLL_INTERVAL_SECS",
                defaults.extract_poll_interval.as_secs(),
            )?),
            extract_max_polls: parse_env("EXTRACT_MAX_POLLS", defaults.extract_max_polls)?,
            structured_summaries: parse_env(
                "STRUCTURED_SUMMARIES",
                defaults.structured_summaries,
            )?,
        })
    }
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match optional_env(key) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
