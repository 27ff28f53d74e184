// src/config/models.rs
use anyhow::{bail, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HEALTH_URL: &str = "http://localhost:9000/api/health";
pub const DEFAULT_INTERVAL_MS: u64 = 3000;
/// Total request budget, same as aiohttp's default `ClientTimeout(total=300)`.
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    pub url: Url,
    pub interval_ms: u64,
    /// Total request timeout, body read included. `null` disables it.
    pub timeout_ms: Option<u64>,
    /// Report non-2xx responses as failures instead of printing their body.
    pub fail_on_error_status: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_HEALTH_URL).expect("default health URL is valid"),
            interval_ms: DEFAULT_INTERVAL_MS,
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            fail_on_error_status: false,
        }
    }
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<()> {
        match self.url.scheme() {
            "http" | "https" => {}
            other => bail!("Unsupported URL scheme '{}' in {}", other, self.url),
        }

        if self.interval_ms == 0 {
            bail!("interval_ms must be greater than zero");
        }

        if self.timeout_ms == Some(0) {
            bail!("timeout_ms must be greater than zero when set");
        }

        Ok(())
    }
}
