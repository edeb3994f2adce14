//! Services module
//!
//! Contains the model aggregation logic.

pub mod aggregator;

pub use aggregator::{group_by_company, ModelAggregator, ProviderFetch};
