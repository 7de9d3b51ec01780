//! Tokenscope Core
//!
//! Runtime-agnostic logic shared by the proxy server, the CLI and the
//! browser dashboard:
//!
//! - **types**: validated research record and sentiment
//! - **validate**: schema check for upstream payloads
//! - **batch**: concurrent fetch-and-validate fan-out with order preservation
//! - **dashboard**: explicit dashboard state and its transitions
//! - **format**: table and chart projections
//! - **summary**: markdown summary blocks for token cards
//! - **theme**: persisted dark-mode encoding
//!
//! Nothing here depends on an async runtime, so the crate builds for both
//! native targets and `wasm32-unknown-unknown`.

pub mod batch;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod summary;
pub mod theme;
pub mod types;
pub mod validate;

pub use batch::{fetch_all, normalize_tokens, BatchReport, Notice, NoticeLevel, TokenFailure};
pub use dashboard::{Completion, DashboardState, PendingBatch, TokenList};
pub use error::{FetchError, ValidationError};
pub use format::{chart_series, ChartBar, TableMetric, NOT_AVAILABLE};
pub use summary::{excerpt, parse_summary, SummaryBlock};
pub use theme::{encode_dark_mode, parse_dark_mode, DARK_MODE_KEY};
pub use types::{Sentiment, TokenInfo};
pub use validate::validate;
