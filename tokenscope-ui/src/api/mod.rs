//! Proxy API
//!
//! HTTP access to the Tokenscope research proxy.

mod client;

pub use client::{fetch_research, research_endpoint};
