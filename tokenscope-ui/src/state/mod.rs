//! State Management
//!
//! Global dashboard state and theme persistence.

pub mod global;
pub mod theme;

pub use global::{provide_global_state, GlobalState};
