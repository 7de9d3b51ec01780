//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/research`
#[derive(Debug, Default)]
pub struct ResearchQuery {
    /// Token identifier to research; absent or empty is rejected
    pub token: Option<String>,
}

impl ResearchQuery {
    /// Parse a raw query string. A repeated `token` keeps its first value.
    pub fn parse(raw: Option<&str>) -> Self {
        let token = raw.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "token")
                .map(|(_, value)| value.into_owned())
        });
        Self { token }
    }

    /// The token, if one was supplied
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Full health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Research service the proxy forwards to
    pub upstream: String,
    /// Whether upstream status codes are relayed
    pub propagate_status: bool,
    /// Server start time
    pub started_at: DateTime<Utc>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_missing() {
        let query = ResearchQuery {
            token: Some(String::new()),
        };
        assert_eq!(query.token(), None);
        assert_eq!(ResearchQuery::default().token(), None);

        let query = ResearchQuery {
            token: Some("btc".to_string()),
        };
        assert_eq!(query.token(), Some("btc"));
    }

    #[test]
    fn test_parse_query_string() {
        assert_eq!(ResearchQuery::parse(None).token(), None);
        assert_eq!(ResearchQuery::parse(Some("")).token(), None);
        assert_eq!(ResearchQuery::parse(Some("other=1")).token(), None);
        assert_eq!(
            ResearchQuery::parse(Some("token=wrapped%20btc")).token(),
            Some("wrapped btc")
        );
        assert_eq!(
            ResearchQuery::parse(Some("token=btc&token=eth")).token(),
            Some("btc")
        );
        assert_eq!(ResearchQuery::parse(Some("token=&token=eth")).token(), None);
    }
}
