//! HTTP client for making requests to the upstream data provider

use crate::config::OutgoingSettings;
use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper carrying the provider bearer token
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    bearer: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new(bearer: impl Into<String>) -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default(), bearer)
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings, bearer: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            bearer: bearer.into(),
        })
    }

    /// GET a JSON document from the provider
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.bearer))
            .header("accept", "application/json")
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        Self::parse_response(response).await
    }

    /// POST a JSON body to the provider and return the JSON response
    pub async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.bearer))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        Self::parse_response(response).await
    }

    /// Check the status line and decode the body
    ///
    /// The status code is embedded in the error text so callers can
    /// special-case upstream statuses the way the handlers do.
    async fn parse_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            bail!("HTTP error {} from {}", status.as_u16(), url);
        }

        response
            .json()
            .await
            .with_context(|| format!("invalid JSON from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new("test-token");
        assert!(client.is_ok());
    }
}
