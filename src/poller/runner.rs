// src/poller/runner.rs
use super::error::PollError;
use super::report::Reporter;
use super::session::{decode_body, HealthSession};
use crate::config::PollerConfig;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::io::{self, Write};
use tokio::time::sleep;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub type CycleResult = Result<HealthResponse, PollError>;

/// Sequential health poller: request, report, wait, repeat.
pub struct Poller<W> {
    config: PollerConfig,
    session: HealthSession,
    reporter: Reporter<W>,
}

impl<W: Write> Poller<W> {
    pub fn new(config: PollerConfig, out: W) -> Result<Self> {
        let session = HealthSession::new(&config)?;

        Ok(Self {
            config,
            session,
            reporter: Reporter::new(out),
        })
    }

    /// Poll forever. Per-cycle failures are reported and absorbed; only a
    /// broken output stream ends the loop.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Polling {} every {:?}",
            self.session.url(),
            self.config.interval()
        );

        loop {
            self.poll_once()
                .await
                .context("Failed to write poll report")?;
            sleep(self.config.interval()).await;
        }
    }

    /// Run exactly `cycles` poll cycles, waiting the interval between them.
    pub async fn run_cycles(&mut self, cycles: usize) -> Result<Vec<CycleResult>> {
        let mut results = Vec::with_capacity(cycles);

        for cycle in 0..cycles {
            if cycle > 0 {
                sleep(self.config.interval()).await;
            }

            let result = self
                .poll_once()
                .await
                .context("Failed to write poll report")?;
            results.push(result);
        }

        Ok(results)
    }

    /// One Requesting phase. The outer error is the output stream failing;
    /// the inner one is the poll failure, already reported.
    pub async fn poll_once(&mut self) -> io::Result<CycleResult> {
        debug!("GET {}", self.session.url());

        let result = self.request_and_report().await?;

        if let Err(err) = &result {
            warn!(kind = err.kind(), "Health poll failed: {}", err);
            self.reporter.error(err)?;
        }

        Ok(result)
    }

    pub fn output(&self) -> &W {
        self.reporter.get_ref()
    }

    async fn request_and_report(&mut self) -> io::Result<CycleResult> {
        let response = match self.session.fetch().await {
            Ok(response) => response,
            Err(err) => return Ok(Err(err)),
        };

        let status = response.status();
        debug!("Health endpoint responded with {}", status);
        self.reporter.status(status.as_u16())?;

        if self.config.fail_on_error_status && !status.is_success() {
            return Ok(Err(PollError::Status(status)));
        }

        let body = match decode_body(response).await {
            Ok(body) => body,
            Err(err) => return Ok(Err(err)),
        };
        self.reporter.body(&body)?;

        Ok(Ok(HealthResponse { status, body }))
    }
}
