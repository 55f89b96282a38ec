//! Fantasy API client for squad picks.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::dto::PicksResponse;
use crate::error::Result;
use crate::infrastructure::config::fpl::FplConfig;
use crate::port::outbound::squad::{SquadSnapshot, SquadSource};

/// HTTP client for the public fantasy API.
pub struct FplClient {
    http: HttpClient,
    base_url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl FplClient {
    /// Create a client for `base_url` with a single attempt per request.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &FplConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    /// URL of the picks endpoint for one team and round.
    #[must_use]
    pub fn picks_url(&self, team_id: u64, round: u32) -> String {
        format!("{}/entry/{team_id}/event/{round}/picks/", self.base_url)
    }

    async fn get_with_retry<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let err = match self.http.get(url).send().await {
                Ok(response) => match response.error_for_status() {
                    Ok(response) => return Ok(response.json::<T>().await?),
                    Err(err) => err,
                },
                Err(err) => err,
            };

            if attempt >= max_attempts || !Self::should_retry(&err) {
                return Err(err.into());
            }
            self.backoff(attempt, max_attempts, &err).await;
        }
    }

    /// Transport failures, rate limiting and server errors are transient.
    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout()
            || err.is_connect()
            || err
                .status()
                .is_some_and(|s| s == StatusCode::TOO_MANY_REQUESTS || s.is_server_error())
    }

    /// Delay before the retry that follows `attempt`, doubling each time.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        let delay = self.backoff_delay(attempt);
        warn!(
            attempt,
            max_attempts,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            error = %err,
            "HTTP request failed, retrying"
        );
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

#[async_trait]
impl SquadSource for FplClient {
    fn name(&self) -> &'static str {
        "fpl-api"
    }

    async fn fetch(&self, team_id: u64, round: u32) -> Result<SquadSnapshot> {
        let url = self.picks_url(team_id, round);
        debug!(url = %url, "Fetching picks");
        let response: PicksResponse = self.get_with_retry(&url).await?;
        response.into_snapshot()
    }
}
