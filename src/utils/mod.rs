//! Shared numerical utilities.

pub mod optimization;

pub use optimization::{minimize_bounded, SearchConfig, SearchResult};
