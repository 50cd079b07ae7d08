use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::analysis::matcher::MatchMode;
use crate::extraction::DEFAULT_MAX_UPLOAD_BYTES;
use crate::inference::DEFAULT_INFERENCE_URL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub match_mode: MatchMode,
    pub max_upload_bytes: usize,
    pub inference_enabled: bool,
    pub inference_api_url: String,
    pub inference_api_token: Option<String>,
    pub inference_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            match_mode: var("MATCH_MODE", "substring")
                .parse::<MatchMode>()
                .map_err(|e| anyhow!(e))
                .context("MATCH_MODE is invalid")?,
            max_upload_bytes: var("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            inference_enabled: parse_bool(&var("INFERENCE_ENABLED", "false"))
                .context("INFERENCE_ENABLED must be true or false")?,
            inference_api_url: var("INFERENCE_API_URL", DEFAULT_INFERENCE_URL),
            inference_api_token: lookup("INFERENCE_API_TOKEN").filter(|t| !t.trim().is_empty()),
            inference_timeout: Duration::from_secs(
                var("INFERENCE_TIMEOUT_SECS", "15")
                    .parse::<u64>()
                    .context("INFERENCE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("'{other}' is not a boolean")),
    }
}
