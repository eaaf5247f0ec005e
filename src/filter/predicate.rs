//! Composable row predicate.

use crate::parser::ParsedRow;
use std::fmt;

/// Filter constraints for one scan
///
/// Built once from validated arguments and never mutated during a scan.
/// `None` means the dimension is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only rows of this group
    pub group: Option<i64>,

    /// Keep only rows with this request id
    pub request: Option<i64>,

    /// Inclusive lower bound on elapsed nanoseconds
    pub min_nanos: Option<i64>,

    /// Inclusive upper bound on elapsed nanoseconds
    pub max_nanos: Option<i64>,
}

impl FilterConfig {
    /// Filter that matches every row
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: i64) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_request(mut self, request: i64) -> Self {
        self.request = Some(request);
        self
    }

    pub fn with_min_nanos(mut self, nanos: i64) -> Self {
        self.min_nanos = Some(nanos);
        self
    }

    pub fn with_max_nanos(mut self, nanos: i64) -> Self {
        self.max_nanos = Some(nanos);
        self
    }

    /// Whether no constraint is set
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the row passes every active constraint
    pub fn matches(&self, row: &ParsedRow) -> bool {
        self.group.map_or(true, |group| row.group == group)
            && self.request.map_or(true, |request| row.request == request)
            && self.min_nanos.map_or(true, |min| row.elapsed_nanos >= min)
            && self.max_nanos.map_or(true, |max| row.elapsed_nanos <= max)
    }
}

impl fmt::Display for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return write!(f, "all rows");
        }

        let mut parts = Vec::new();
        if let Some(group) = self.group {
            parts.push(format!("group={}", group));
        }
        if let Some(request) = self.request {
            parts.push(format!("request={}", request));
        }
        if let Some(min) = self.min_nanos {
            parts.push(format!("time>={}ns", min));
        }
        if let Some(max) = self.max_nanos {
            parts.push(format!("time<={}ns", max));
        }
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(group: i64, request: i64, elapsed_nanos: i64) -> ParsedRow {
        ParsedRow {
            group,
            request,
            elapsed_nanos,
            raw_text: format!("{}\t{}\t{}", group, request, elapsed_nanos),
            line_number: 1,
        }
    }

    #[test]
    fn test_unconstrained_matches_everything() {
        let filter = FilterConfig::new();

        assert!(filter.is_unconstrained());
        assert!(filter.matches(&row(1, 1, 0)));
        assert!(filter.matches(&row(-1, -1, -1)));
        assert!(filter.matches(&row(i64::MAX, i64::MIN, i64::MAX)));
    }

    #[test]
    fn test_group_and_request_are_exact() {
        let filter = FilterConfig::new().with_group(2).with_request(5);

        assert!(filter.matches(&row(2, 5, 10)));
        assert!(!filter.matches(&row(2, 4, 10)));
        assert!(!filter.matches(&row(1, 5, 10)));
    }

    #[test]
    fn test_negative_group_is_a_real_filter() {
        let filter = FilterConfig::new().with_group(-1);

        assert!(filter.matches(&row(-1, 1, 10)));
        assert!(!filter.matches(&row(1, 1, 10)));
    }

    #[test]
    fn test_time_bounds_are_inclusive() {
        let filter = FilterConfig::new().with_min_nanos(100).with_max_nanos(200);

        assert!(!filter.matches(&row(1, 1, 99)));
        assert!(filter.matches(&row(1, 1, 100)));
        assert!(filter.matches(&row(1, 1, 200)));
        assert!(!filter.matches(&row(1, 1, 201)));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let filter = FilterConfig::new().with_min_nanos(200).with_max_nanos(100);

        for nanos in [50, 100, 150, 200, 250] {
            assert!(!filter.matches(&row(1, 1, nanos)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FilterConfig::new().to_string(), "all rows");
        assert_eq!(
            FilterConfig::new().with_group(1).with_max_nanos(5).to_string(),
            "group=1 time<=5ns"
        );
    }
}
