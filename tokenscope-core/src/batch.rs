//! Batch Fan-out
//!
//! Issues one fetch per token concurrently, waits for every fetch to settle
//! and partitions the outcomes into valid results and failures. Results keep
//! input order regardless of completion order.

use futures_util::future::join_all;
use serde_json::Value;
use std::fmt;
use std::future::Future;

use crate::error::FetchError;
use crate::types::TokenInfo;
use crate::validate::validate;

/// Drop blank entries, trim and lower-case the rest. Order is preserved.
pub fn normalize_tokens<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Transient message shown to the user after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Every entry was blank
    NoValidToken,
    /// Some tokens failed; carries the failure count
    PartialFailure(usize),
    /// Something escaped the orchestration logic
    Unexpected,
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::NoValidToken => NoticeLevel::Info,
            Notice::PartialFailure(_) => NoticeLevel::Warning,
            Notice::Unexpected => NoticeLevel::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoValidToken => write!(f, "Please enter at least one valid token"),
            Notice::PartialFailure(1) => write!(f, "Failed to fetch data for 1 token"),
            Notice::PartialFailure(n) => write!(f, "Failed to fetch data for {} tokens", n),
            Notice::Unexpected => write!(f, "Something went wrong while fetching token data"),
        }
    }
}

/// A token that did not make it into the result set
#[derive(Debug, Clone, PartialEq)]
pub struct TokenFailure {
    pub token: String,
    pub error: FetchError,
}

/// Aggregated outcome of one settled submission
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub generation: u64,
    /// Normalized tokens in request order
    pub requested: Vec<String>,
    /// Valid results in request order
    pub results: Vec<TokenInfo>,
    pub failures: Vec<TokenFailure>,
}

impl BatchReport {
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Warning to show, if any token failed
    pub fn notice(&self) -> Option<Notice> {
        match self.failures.len() {
            0 => None,
            n => Some(Notice::PartialFailure(n)),
        }
    }
}

/// Fetch and validate every token concurrently.
///
/// `fetch` receives one normalized token and yields its raw JSON payload.
/// A transport, status or validation failure affects only that token.
pub async fn fetch_all<F, Fut>(generation: u64, tokens: Vec<String>, fetch: F) -> BatchReport
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Value, FetchError>>,
{
    let outcomes = join_all(tokens.iter().map(|token| {
        let pending = fetch(token.clone());
        async move { validate(&pending.await?).map_err(FetchError::from) }
    }))
    .await;

    let mut results = Vec::with_capacity(tokens.len());
    let mut failures = Vec::new();
    for (token, outcome) in tokens.iter().zip(outcomes) {
        match outcome {
            Ok(info) => results.push(info),
            Err(error) => {
                tracing::debug!(token = %token, error = %error, "Token research failed");
                failures.push(TokenFailure {
                    token: token.clone(),
                    error,
                });
            }
        }
    }

    BatchReport {
        generation,
        requested: tokens,
        results,
        failures,
    }
}
