//! Report writers.
//!
//! This module renders scan results as text:
//! - Matching lines, verbatim (list mode)
//! - A count/min/avg/max table (summary mode)

pub mod report;
pub mod unit;

// Re-export main functions
pub use report::{write_row, write_stats, write_summary, ReportMode, Summary};
pub use unit::TimeUnit;
