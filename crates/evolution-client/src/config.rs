//! Gateway connection configuration

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Evolution gateway configuration
///
/// Resolved once and immutable for the lifetime of the client. The base URL
/// and API key come from explicit arguments or from the environment
/// (`EVOLUTION_API_URL`, `EVOLUTION_API_KEY`, `EVOLUTION_TIMEOUT`).
#[derive(Clone, Deserialize)]
pub struct EvolutionConfig {
    /// Gateway base URL (e.g. `https://evo.example.com`)
    pub base_url: String,
    /// API key, sent as the `apikey` header on every request
    pub api_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// Custom Debug implementation to mask the API key
impl fmt::Debug for EvolutionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvolutionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &mask_api_key(&self.api_key))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Mask an API key for safe display
fn mask_api_key(key: &str) -> String {
    if key.len() <= 8 {
        return "****".to_string();
    }
    format!("{}...{}", &key[..4], &key[key.len() - 4..])
}

impl EvolutionConfig {
    /// Create with a base URL and API key
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("EVOLUTION_API_URL")
            .map_err(|_| Error::Config("EVOLUTION_API_URL not set".to_string()))?;

        let api_key = std::env::var("EVOLUTION_API_KEY")
            .map_err(|_| Error::Config("EVOLUTION_API_KEY not set".to_string()))?;

        let timeout_secs = std::env::var("EVOLUTION_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}
