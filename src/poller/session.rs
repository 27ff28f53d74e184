// src/poller/session.rs
use super::error::PollError;
use crate::config::PollerConfig;
use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

/// Reusable HTTP client scoped to the whole polling loop.
pub struct HealthSession {
    client: Client,
    url: Url,
}

impl HealthSession {
    pub fn new(config: &PollerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Response, PollError> {
        let response = self.client.get(self.url.as_str()).send().await?;
        Ok(response)
    }
}

/// Read the full body and decode it as untyped JSON. The response must
/// declare a JSON media type; a blank body decodes to `null`.
pub async fn decode_body(response: Response) -> Result<Value, PollError> {
    let mime = media_type(&response);
    if !is_json_media_type(&mime) {
        return Err(PollError::ContentType(mime));
    }

    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let body = serde_json::from_slice(&bytes)?;
    Ok(body)
}

/// Media type without parameters, lowercased. Missing header means
/// `application/octet-stream`.
fn media_type(response: &Response) -> String {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

/// `application/json` or any `application/<x>+json` subtype.
fn is_json_media_type(mime: &str) -> bool {
    match mime.strip_prefix("application/") {
        Some("json") => true,
        Some(subtype) => subtype.ends_with("+json") && subtype.len() > "+json".len(),
        None => false,
    }
}
