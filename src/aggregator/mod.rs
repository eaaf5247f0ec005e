//! Aggregation of matching rows into summary statistics.

pub mod stats;

// Re-export main types
pub use stats::RunningStats;
