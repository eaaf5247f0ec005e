//! tsvstat
//!
//! Single-pass filtering and summarizing of tab-separated results files
//! produced by load tests: one row per timed request, carrying a group
//! (goroutine) id, a request id and the elapsed time in nanoseconds.
//!
//! The pipeline is `reader` -> `parser` -> `filter` -> `aggregator` /
//! `output`, driven by [`commands::scan_lines`]. Nothing but the running
//! statistics outlives the line being processed, so memory use does not
//! grow with the input.
//!
//! ```bash
//! tsvstat --group=1 --unit=ns results.tsv
//! tsvstat --list --min=1500000ns results.tsv
//! ```

pub mod aggregator;
pub mod commands;
pub mod filter;
pub mod output;
pub mod parser;
pub mod reader;
pub mod utils;
