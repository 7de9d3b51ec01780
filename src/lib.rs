//! # Tokenscope
//!
//! Crypto token research dashboard backend: a thin proxy to a hosted
//! research service, plus the fetch-and-validate orchestration used by the
//! command-line client.
//!
//! ## Modules
//!
//! - [`api`]: Axum server exposing the research proxy and health probes
//! - [`upstream`]: HTTP client for the research service
//! - [`research`]: Batch orchestration over a [`TokenSource`]; schema,
//!   validation and formatting are re-exported from `tokenscope-core`
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tokenscope::research::{Orchestrator, ProxySource, Submission};
//!
//! #[tokio::main]
//! async fn main() {
//!     let orchestrator = Orchestrator::new(ProxySource::new("http://localhost:8083"));
//!
//!     let submission = orchestrator.submit(&["btc", "eth", " "]).await;
//!     if let Some(notice) = submission.notice() {
//!         eprintln!("{}", notice);
//!     }
//!     if let Submission::Completed(report) = submission {
//!         for info in &report.results {
//!             println!("{} ({}): {}", info.name, info.symbol, info.sentiment);
//!         }
//!     }
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod research;
pub mod upstream;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoadedConfig, LoggingConfig, UpstreamConfig};

pub use research::{
    validate, BatchReport, FetchError, Notice, Orchestrator, ProxySource, Sentiment, Submission,
    TokenInfo, TokenSource, ValidationError,
};

pub use upstream::{UpstreamClient, UpstreamError, UpstreamResponse};
