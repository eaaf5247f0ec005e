//! Scan command implementation.
//!
//! The scan command:
//! 1. Validates the arguments into a scan plan
//! 2. Reads the results file line by line
//! 3. Parses and filters each line
//! 4. Echoes matching lines, or folds them into running statistics
//! 5. Writes the summary table once the input is exhausted

use super::models::{ScanArgs, ScanPlan};
use crate::aggregator::RunningStats;
use crate::filter::FilterConfig;
use crate::output::{write_row, write_stats, ReportMode, TimeUnit};
use crate::parser::parse_line;
use crate::reader::{InputFile, NumberedLines};
use crate::utils::error::ScanError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::time::Instant;

/// Counters describing a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Physical lines read, comments included
    pub lines_read: usize,

    /// Comment lines skipped
    pub comments: usize,

    /// Data lines parsed
    pub rows_parsed: usize,

    /// Rows that passed the filter
    pub rows_matched: usize,

    /// Statistics of the matching rows; empty in list mode
    pub stats: RunningStats,
}

impl ScanOutcome {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Lines: {} | Comments: {} | Rows: {} | Matched: {}",
            self.lines_read, self.comments, self.rows_parsed, self.rows_matched
        )
    }
}

/// Execute the scan command
///
/// **Public** - validates `args`, then runs [`execute_plan`]
///
/// # Arguments
/// * `args` - Scan command arguments
/// * `out` - Sink for listed rows or the summary table
///
/// # Errors
/// * Invalid arguments (`ScanError::Usage`)
/// * Everything [`execute_plan`] can fail with
pub fn execute_scan<W: Write>(args: &ScanArgs, out: &mut W) -> Result<ScanOutcome> {
    let plan = validate_args(args)?;
    execute_plan(&plan, out)
}

/// Run an already validated scan
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable input file
/// * Malformed lines
/// * Output write failures
///
/// The underlying [`ScanError`] stays reachable through
/// `anyhow::Error::downcast_ref`.
pub fn execute_plan<W: Write>(plan: &ScanPlan, out: &mut W) -> Result<ScanOutcome> {
    let start_time = Instant::now();

    info!("Scanning {}", plan.input.path().display());
    debug!("Filter: {} | Mode: {:?}", plan.filter, plan.mode);

    let lines = plan.input.lines()?;
    let outcome = scan_lines(lines, &plan.filter, plan.mode, out)
        .with_context(|| format!("Failed to scan {}", plan.input.path().display()))?;

    out.flush().map_err(ScanError::Output)?;

    info!("{}", outcome.summary());
    info!("Scan completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(outcome)
}

/// Validate scan arguments
///
/// **Public** - can be called before execute_scan for early validation
///
/// # Returns
/// The scan plan if every option is valid
///
/// # Errors
/// * `ScanError::Usage` - bad unit, bad duration or empty input path
pub fn validate_args(args: &ScanArgs) -> Result<ScanPlan, ScanError> {
    if args.input.as_os_str().is_empty() {
        return Err(ScanError::usage("input path cannot be empty"));
    }

    let unit: TimeUnit = args.unit.parse()?;

    let mut filter = FilterConfig::new();
    if let Some(group) = args.group {
        filter = filter.with_group(group);
    }
    if let Some(request) = args.request {
        filter = filter.with_request(request);
    }
    if let Some(min) = args.min.as_deref() {
        filter = filter.with_min_nanos(parse_duration_nanos("min", min)?);
    }
    if let Some(max) = args.max.as_deref() {
        filter = filter.with_max_nanos(parse_duration_nanos("max", max)?);
    }

    let mode = if args.list {
        ReportMode::List
    } else {
        ReportMode::Summary(unit)
    };

    Ok(ScanPlan {
        input: InputFile::new(&args.input),
        filter,
        mode,
    })
}

/// Parse a duration option such as `1500000ns`, `2ms` or `1m 30s`
///
/// # Errors
/// * `ScanError::Usage` - unparseable, or too large for `i64` nanoseconds
pub fn parse_duration_nanos(option: &str, value: &str) -> Result<i64, ScanError> {
    let duration = humantime::parse_duration(value.trim())
        .map_err(|e| ScanError::usage(format!("invalid --{} duration {:?}: {}", option, value, e)))?;

    i64::try_from(duration.as_nanos())
        .map_err(|_| ScanError::usage(format!("--{} duration {:?} is too large", option, value)))
}

/// Run the single-pass filter-and-aggregate loop
///
/// **Public** - the core of the tool, independent of files and CLI
///
/// Each line is read, parsed, filtered and then either echoed (list mode)
/// or folded into the statistics (summary mode) before the next line is
/// read. The first error stops the scan; in summary mode nothing has been
/// written at that point.
pub fn scan_lines<R: BufRead, W: Write>(
    lines: NumberedLines<R>,
    filter: &FilterConfig,
    mode: ReportMode,
    out: &mut W,
) -> Result<ScanOutcome, ScanError> {
    let mut outcome = ScanOutcome::default();

    for line in lines {
        let line = line?;
        outcome.lines_read = line.number;

        let Some(row) = parse_line(line)? else {
            outcome.comments += 1;
            continue;
        };
        outcome.rows_parsed += 1;

        if !filter.matches(&row) {
            continue;
        }
        outcome.rows_matched += 1;

        match mode {
            ReportMode::List => write_row(out, &row.raw_text)?,
            ReportMode::Summary(_) => outcome.stats.add(row.elapsed_nanos),
        }
    }

    if let ReportMode::Summary(unit) = mode {
        if !write_stats(out, &outcome.stats, unit)? {
            debug!("No rows matched, summary suppressed");
        }
    }

    Ok(outcome)
}
