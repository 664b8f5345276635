//! Runtime configuration read from the environment (and `.env`).

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing OPENROUTER_API_KEY in .env")]
    MissingApiKey,
    #[error("Invalid OPENROUTER_API_URL {value}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
    #[error("Invalid NELAX_REQUEST_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: Url,
    pub model: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub prompts_file: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENROUTER_API_KEY").ok_or(ConfigError::MissingApiKey)?;

        let raw_url = get("OPENROUTER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source,
        })?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("NELAX_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_key,
            api_url,
            model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port,
            public_dir: get("NELAX_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            prompts_file: get("NELAX_PROMPTS_FILE").map(PathBuf::from),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
