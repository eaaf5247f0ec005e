//! Row filtering.
//!
//! A filter is the conjunction of up to four independent constraints.
//! Unset constraints match every row.

pub mod predicate;

pub use predicate::FilterConfig;
