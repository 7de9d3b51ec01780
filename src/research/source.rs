//! HTTP Token Source
//!
//! Fetches research payloads from a running Tokenscope proxy.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

use tokenscope_core::FetchError;

use super::batch::TokenSource;

/// Fetches `GET {base}/api/research?token=...` from a Tokenscope server
pub struct ProxySource {
    client: Client,
    base_url: String,
}

impl ProxySource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full research URL for a token
    pub fn research_url(&self, token: &str) -> String {
        format!(
            "{}/api/research?token={}",
            self.base_url,
            urlencoding::encode(token)
        )
    }
}

#[async_trait]
impl TokenSource for ProxySource {
    async fn fetch(&self, token: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(self.research_url(token))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[async_trait]
impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    async fn fetch(&self, token: &str) -> Result<Value, FetchError> {
        (**self).fetch(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_url_encodes_token() {
        let source = ProxySource::new("http://localhost:8083/");
        assert_eq!(source.base_url(), "http://localhost:8083");
        assert_eq!(
            source.research_url("wrapped bitcoin"),
            "http://localhost:8083/api/research?token=wrapped%20bitcoin"
        );
        assert_eq!(
            source.research_url("btc&x=1"),
            "http://localhost:8083/api/research?token=btc%26x%3D1"
        );
    }
}
