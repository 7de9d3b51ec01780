//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::upstream::UpstreamClient;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client for the research service
    pub upstream: Arc<UpstreamClient>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by /health
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(upstream: Arc<UpstreamClient>, config: ApiConfig) -> Self {
        Self {
            upstream,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
