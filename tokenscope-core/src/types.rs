//! Research Types
//!
//! The validated research record for a single token and its sentiment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A validated research result for one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Identifier, unique within a single result set
    pub id: String,
    /// Display name (e.g. "Bitcoin")
    pub name: String,
    /// Ticker symbol (e.g. "btc")
    pub symbol: String,
    /// Logo URL
    pub image: String,
    /// Markdown narrative written by the research service
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circulating_supply: Option<f64>,
    pub sentiment: Sentiment,
}

impl TokenInfo {
    /// Price as a chart value. Unknown prices chart as zero.
    pub fn chart_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// Qualitative market signal attached by the research service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "strong bullish")]
    StrongBullish,
    #[serde(rename = "bullish")]
    Bullish,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "bearish")]
    Bearish,
    #[serde(rename = "strong bearish")]
    StrongBearish,
}

impl Sentiment {
    pub const ALL: [Sentiment; 5] = [
        Sentiment::StrongBullish,
        Sentiment::Bullish,
        Sentiment::Neutral,
        Sentiment::Bearish,
        Sentiment::StrongBearish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::StrongBullish => "strong bullish",
            Sentiment::Bullish => "bullish",
            Sentiment::Neutral => "neutral",
            Sentiment::Bearish => "bearish",
            Sentiment::StrongBearish => "strong bearish",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::ALL
            .into_iter()
            .find(|sentiment| sentiment.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSentiment(s.to_string()))
    }
}
