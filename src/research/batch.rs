//! Batch Orchestration
//!
//! Fans out one research request per token, validates every response and
//! aggregates the survivors in input order.
//!
//! Each submission takes a new generation number. A batch that settles after
//! a newer submission has started is reported as superseded so its results
//! never replace fresher ones.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tokenscope_core::{fetch_all, normalize_tokens, BatchReport, FetchError, Notice, TokenInfo};

/// Source of raw research payloads, one token at a time
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch the raw JSON payload for a single normalized token
    async fn fetch(&self, token: &str) -> Result<Value, FetchError>;
}

/// Result of a submission
#[derive(Debug, Clone)]
pub enum Submission {
    /// No non-blank token was supplied; nothing was requested
    Empty { generation: u64 },
    /// All requests settled and this is still the newest submission
    Completed(BatchReport),
    /// All requests settled but a newer submission started meanwhile
    Superseded { generation: u64 },
}

impl Submission {
    /// Results to display, or `None` when the view must not be touched
    pub fn results(&self) -> Option<&[TokenInfo]> {
        match self {
            Submission::Empty { .. } => Some(&[]),
            Submission::Completed(report) => Some(&report.results),
            Submission::Superseded { .. } => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            Submission::Empty { .. } => Some(Notice::NoValidToken),
            Submission::Completed(report) => report.notice(),
            Submission::Superseded { .. } => None,
        }
    }
}

/// Fetch-and-validate orchestrator
pub struct Orchestrator<S> {
    source: S,
    generation: AtomicU64,
}

impl<S: TokenSource> Orchestrator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            generation: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Generation of the most recent submission
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Run one submission over the raw input entries.
    ///
    /// Never returns early: every request settles before aggregation.
    pub async fn submit<I: AsRef<str>>(&self, inputs: &[I]) -> Submission {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let tokens = normalize_tokens(inputs);

        if tokens.is_empty() {
            tracing::debug!(generation, "No valid token supplied");
            return Submission::Empty { generation };
        }

        tracing::debug!(generation, count = tokens.len(), "Fetching research");

        let report = fetch_all(generation, tokens, |token| async move {
            self.source.fetch(&token).await
        })
        .await;

        if self.current_generation() != generation {
            tracing::debug!(generation, "Discarding stale batch");
            return Submission::Superseded { generation };
        }

        Submission::Completed(report)
    }
}
