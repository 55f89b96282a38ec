//! Fantasy API configuration.

use std::time::Duration;

use serde::Deserialize;

/// Remote picks API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FplConfig {
    /// Base API URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Team to fetch picks for. `FPLOPT_TEAM_ID` overrides it.
    #[serde(default)]
    pub team_id: Option<u64>,
    /// HTTP request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Attempts per request, including the first (default: 3).
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Pause between attempts in milliseconds (default: 500).
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_api_url() -> String {
    "https://fantasy.premierleague.com/api".into()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_retry_max_attempts() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl FplConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FplConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            team_id: None,
            timeout_secs: default_timeout_secs(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}
