//! Display units for elapsed times.

use crate::utils::config::NANOS_PER_MILLI;
use crate::utils::error::ScanError;
use std::fmt;
use std::str::FromStr;

/// Unit used to display min/avg/max in summary mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    #[default]
    Milliseconds,
}

impl TimeUnit {
    /// Short label used in column headers
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Milliseconds => "ms",
        }
    }

    /// Convert a nanosecond value to this unit
    pub fn convert(&self, nanos: f64) -> f64 {
        match self {
            TimeUnit::Nanoseconds => nanos,
            TimeUnit::Milliseconds => nanos / NANOS_PER_MILLI,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(TimeUnit::Nanoseconds),
            "ms" => Ok(TimeUnit::Milliseconds),
            _ => Err(ScanError::usage(format!(
                "unit must be one of: ns, ms (got {:?})",
                s
            ))),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!("ns".parse::<TimeUnit>().unwrap(), TimeUnit::Nanoseconds);
        assert_eq!("ms".parse::<TimeUnit>().unwrap(), TimeUnit::Milliseconds);
    }

    #[test]
    fn test_invalid_unit_is_usage_error() {
        for bad in ["s", "MS", "", "us"] {
            assert!(bad.parse::<TimeUnit>().unwrap_err().is_usage());
        }
    }

    #[test]
    fn test_conversion() {
        assert_eq!(TimeUnit::Nanoseconds.convert(1_500_000.0), 1_500_000.0);
        assert_eq!(TimeUnit::Milliseconds.convert(1_500_000.0), 1.5);
    }
}
