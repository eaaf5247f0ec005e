//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod scan;

// Re-export main command functions
pub use models::{ScanArgs, ScanPlan};
pub use scan::{execute_plan, execute_scan, parse_duration_nanos, scan_lines, validate_args, ScanOutcome};
