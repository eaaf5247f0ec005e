//! Record types produced by the row parser.

/// One data line of a results file
///
/// Built per input line and dropped once it has been filtered and either
/// emitted or folded into the statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    /// Group (goroutine) id, 1st column
    pub group: i64,

    /// Request id within the group, 2nd column
    pub request: i64,

    /// Elapsed time in nanoseconds, 3rd column
    pub elapsed_nanos: i64,

    /// The line as read, extra columns included
    pub raw_text: String,

    /// 1-based line number in the input
    pub line_number: usize,
}
