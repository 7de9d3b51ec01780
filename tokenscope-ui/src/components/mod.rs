//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod comparison_table;
pub mod loading;
pub mod toast;
pub mod token_card;
pub mod token_inputs;

pub use chart::PriceChart;
pub use comparison_table::ComparisonTable;
pub use loading::{CardSkeleton, Loading};
pub use toast::Toast;
pub use token_card::TokenCard;
pub use token_inputs::TokenInputs;
