use crate::filter::FilterConfig;
use crate::output::ReportMode;
use crate::reader::InputFile;
use crate::utils::config::DEFAULT_UNIT;
use std::path::PathBuf;

/// Arguments for a scan, as given on the command line
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Results file to read
    pub input: PathBuf,

    /// Lower time bound, e.g. `1500000ns` or `2ms`
    pub min: Option<String>,

    /// Upper time bound
    pub max: Option<String>,

    /// Group (1st column) to keep
    pub group: Option<i64>,

    /// Request id (2nd column) to keep
    pub request: Option<i64>,

    /// List matching rows instead of summarizing them
    pub list: bool,

    /// Display unit, `ns` or `ms`
    pub unit: String,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("results.tsv"),
            min: None,
            max: None,
            group: None,
            request: None,
            list: false,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

/// Validated scan configuration
///
/// Produced by `validate_args`; holding one means every option was valid.
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub input: InputFile,
    pub filter: FilterConfig,
    pub mode: ReportMode,
}
