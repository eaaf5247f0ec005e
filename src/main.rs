//! tsvstat CLI
//!
//! Filters a tab-separated results file of timed requests and either
//! lists the matching rows or prints count/min/avg/max over them.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use tsvstat::commands::{execute_plan, validate_args, ScanArgs};
use tsvstat::utils::config::{DEFAULT_UNIT, UNIT_ENV_VAR};

/// Summarize or list rows of a results file
///
/// Each row is `<group>\t<request>\t<elapsed ns>[\t<extra>...]`;
/// lines starting with `#` are ignored.
#[derive(Parser, Debug)]
#[command(name = "tsvstat")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the results file
    #[arg(value_name = "RESULTS_TSV")]
    input: PathBuf,

    /// Keep rows having at least the given time (3rd column), e.g. 1500000ns or 2ms
    #[arg(long, value_name = "DURATION")]
    min: Option<String>,

    /// Keep rows having at most the given time (3rd column)
    #[arg(long, value_name = "DURATION")]
    max: Option<String>,

    /// Keep rows of the given group (goroutine) (1st column)
    #[arg(long, allow_hyphen_values = true)]
    group: Option<i64>,

    /// Keep rows with the given request number (2nd column)
    #[arg(long, allow_hyphen_values = true)]
    request: Option<i64>,

    /// List rows, do not display the summary
    #[arg(long)]
    list: bool,

    /// Time unit used for the summary, one of: ns, ms
    #[arg(long, default_value = DEFAULT_UNIT, env = UNIT_ENV_VAR)]
    unit: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout carries the report, logs go to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ScanArgs {
        input: cli.input,
        min: cli.min,
        max: cli.max,
        group: cli.group,
        request: cli.request,
        list: cli.list,
        unit: cli.unit,
    };

    // Validate args first so that usage errors print usage
    let plan = match validate_args(&args) {
        Ok(plan) => plan,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    execute_plan(&plan, &mut out)?;

    Ok(())
}
