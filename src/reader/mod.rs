//! Line-oriented access to results files.
//!
//! Lines are read lazily, one at a time, and carry their 1-based
//! physical line number so later stages can report precise diagnostics.

pub mod lines;

pub use lines::{InputFile, NumberedLines, RawLine};
