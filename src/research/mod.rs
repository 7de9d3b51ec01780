//! Token Research
//!
//! Native research orchestration on top of `tokenscope-core`: a
//! [`TokenSource`] seam, an HTTP source talking to a running proxy, and a
//! generation-tracking [`Orchestrator`].
//!
//! ## Data Flow
//!
//! 1. Raw input entries are trimmed, lower-cased and blank ones dropped
//! 2. One request per token is issued concurrently
//! 3. Each payload is validated into a [`TokenInfo`] or counted as failed
//! 4. Survivors are kept in input order once every request has settled

mod batch;
mod source;

pub use batch::{Orchestrator, Submission, TokenSource};
pub use source::ProxySource;
pub use tokenscope_core::format::{format_change, format_compact, format_price};
pub use tokenscope_core::{
    normalize_tokens, validate, BatchReport, FetchError, Notice, NoticeLevel, Sentiment,
    TableMetric, TokenFailure, TokenInfo, ValidationError, NOT_AVAILABLE,
};
