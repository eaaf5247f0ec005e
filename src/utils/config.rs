//! Configuration and constants for the CLI.

/// Column separator of the results file
pub const FIELD_SEPARATOR: char = '\t';

/// Lines starting with this marker are comments and never parsed
pub const COMMENT_PREFIX: char = '#';

/// group, request and elapsed time; anything after that is ignored
pub const MIN_FIELDS: usize = 3;

/// Width of every right-aligned column of the summary table
pub const COLUMN_WIDTH: usize = 12;

// 1 ms = 1,000,000 ns
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Display unit used when `--unit` is not given
pub const DEFAULT_UNIT: &str = "ms";

/// Environment variable that can override the display unit
pub const UNIT_ENV_VAR: &str = "TSVSTAT_UNIT";

pub const READ_BUFFER_SIZE: usize = 64 * 1024;
