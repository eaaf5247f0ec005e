//! Row parsing and record definitions.
//!
//! This module handles:
//! - Recognizing comment lines
//! - Splitting data lines into their three numeric columns
//! - Reporting malformed lines with their line number

pub mod schema;
pub mod tsv;

// Re-export main types
pub use schema::ParsedRow;
pub use tsv::{is_comment, parse_fields, parse_line};
