//! Upstream Research Client
//!
//! HTTP client for the third-party research service the proxy forwards to.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Upstream research service client
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

/// Raw upstream answer: status code plus the JSON body, untouched
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamClient {
    /// Create a new client with the given configuration
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Request research for one token.
    ///
    /// Any status is returned as-is; only transport failures and non-JSON
    /// bodies are errors.
    pub async fn research(&self, token: &str) -> Result<UpstreamResponse, UpstreamError> {
        let response = self
            .client
            .get(&self.config.url)
            .query(&[("token", token)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else if e.is_connect() {
                    UpstreamError::Unavailable
                } else {
                    UpstreamError::Request(e)
                }
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout
            } else {
                UpstreamError::Request(e)
            }
        })?;

        let body = serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))?;

        tracing::debug!(token = %token, status, "Upstream research received");

        Ok(UpstreamResponse { status, body })
    }
}

/// Errors that can occur when talking to the research service
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Research service unavailable")]
    Unavailable,

    #[error("Research service timed out")]
    Timeout,

    #[error("Research request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Research service returned a non-JSON body: {0}")]
    InvalidBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_config() {
        let client = UpstreamClient::new(UpstreamConfig::new("http://127.0.0.1:1/research")).unwrap();
        assert_eq!(client.config().url, "http://127.0.0.1:1/research");
        assert_eq!(client.config().timeout_ms, 30_000);
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            UpstreamClient::new(UpstreamConfig::new(format!("http://{}/research", addr))).unwrap();

        let err = client.research("btc").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Unavailable));
    }
}
