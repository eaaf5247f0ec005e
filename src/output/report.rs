//! Text report writer.
//!
//! List mode echoes matching lines verbatim. Summary mode prints a
//! two-line table:
//!
//! ```text
//!        count	   min (ms)	   avg (ms)	   max (ms)
//!            3	        1.20	        2.50	        4.10
//! ```
//!
//! Each column is right-aligned in a 12-character field and columns are
//! separated by tabs.

use super::unit::TimeUnit;
use crate::aggregator::RunningStats;
use crate::utils::config::COLUMN_WIDTH;
use std::io::{self, Write};

/// What a scan writes to its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Echo every matching line
    List,
    /// Print count/min/avg/max once the input is exhausted
    Summary(TimeUnit),
}

impl Default for ReportMode {
    fn default() -> Self {
        ReportMode::Summary(TimeUnit::default())
    }
}

/// Final statistics converted to the display unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: u64,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub unit: TimeUnit,
}

impl Summary {
    /// Build the report values from accumulated statistics
    ///
    /// # Returns
    /// `None` when nothing matched; there is nothing to report then
    pub fn from_stats(stats: &RunningStats, unit: TimeUnit) -> Option<Self> {
        let (min, max, mean) = (stats.min()?, stats.max()?, stats.mean()?);

        Some(Self {
            count: stats.count(),
            min: unit.convert(min as f64),
            avg: unit.convert(mean),
            max: unit.convert(max as f64),
            unit,
        })
    }

    /// Header line, without terminator
    pub fn header(&self) -> String {
        let label = |name: &str| format!("{} ({})", name, self.unit);
        format!(
            "{:>w$}\t{:>w$}\t{:>w$}\t{:>w$}",
            "count",
            label("min"),
            label("avg"),
            label("max"),
            w = COLUMN_WIDTH
        )
    }

    /// Data line, without terminator
    pub fn values(&self) -> String {
        format!(
            "{:>w$}\t{:>w$.2}\t{:>w$.2}\t{:>w$.2}",
            self.count,
            self.min,
            self.avg,
            self.max,
            w = COLUMN_WIDTH
        )
    }
}

/// Write the summary table
pub fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "{}", summary.header())?;
    writeln!(out, "{}", summary.values())
}

/// Write the summary table for `stats`, or nothing if it is empty
///
/// # Returns
/// Whether a table was written
pub fn write_stats<W: Write>(out: &mut W, stats: &RunningStats, unit: TimeUnit) -> io::Result<bool> {
    match Summary::from_stats(stats, unit) {
        Some(summary) => write_summary(out, &summary).map(|_| true),
        None => Ok(false),
    }
}

/// Echo one matching line
pub fn write_row<W: Write>(out: &mut W, raw_text: &str) -> io::Result<()> {
    writeln!(out, "{}", raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(stats: &RunningStats, unit: TimeUnit) -> String {
        let mut out = Vec::new();
        write_stats(&mut out, stats, unit).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_layout_ms() {
        let stats: RunningStats = [1_200_000, 2_200_000, 4_100_000].into_iter().collect();

        assert_eq!(
            render(&stats, TimeUnit::Milliseconds),
            "       count\t    min (ms)\t    avg (ms)\t    max (ms)\n\
             \x20          3\t        1.20\t        2.50\t        4.10\n"
        );
    }

    #[test]
    fn test_summary_layout_ns() {
        let stats: RunningStats = [10, 20].into_iter().collect();

        assert_eq!(
            render(&stats, TimeUnit::Nanoseconds),
            "       count\t    min (ns)\t    avg (ns)\t    max (ns)\n\
             \x20          2\t       10.00\t       15.00\t       20.00\n"
        );
    }

    #[test]
    fn test_empty_stats_write_nothing() {
        let mut out = Vec::new();
        let written = write_stats(&mut out, &RunningStats::new(), TimeUnit::Milliseconds).unwrap();

        assert!(!written);
        assert!(out.is_empty());
        assert!(Summary::from_stats(&RunningStats::new(), TimeUnit::Nanoseconds).is_none());
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let stats = RunningStats::new().fold(123_456_789_012_345);
        let values = Summary::from_stats(&stats, TimeUnit::Nanoseconds).unwrap().values();

        assert!(values.ends_with("123456789012345.00"));
    }

    #[test]
    fn test_write_row_is_verbatim() {
        let mut out = Vec::new();
        write_row(&mut out, "1\t2\t3\textra column").unwrap();

        assert_eq!(out, b"1\t2\t3\textra column\n");
    }
}
