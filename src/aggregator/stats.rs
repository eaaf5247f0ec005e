//! Running statistics over elapsed times.
//!
//! Values are accumulated in nanoseconds as integers. Conversion to a
//! display unit happens only when the report is rendered.

use std::cmp::{max, min};

/// Smallest and largest value seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extremes {
    min: i64,
    max: i64,
}

/// Count, sum, min and max of the matching rows
///
/// min, max and mean are only defined once at least one value has been
/// added; until then the accessors return `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStats {
    count: u64,
    sum: i128,
    extremes: Option<Extremes>,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one elapsed time in nanoseconds
    pub fn add(&mut self, nanos: i64) {
        self.extremes = Some(match self.extremes {
            None => Extremes { min: nanos, max: nanos },
            Some(e) => Extremes {
                min: min(e.min, nanos),
                max: max(e.max, nanos),
            },
        });
        self.sum += i128::from(nanos);
        self.count += 1;
    }

    /// Functional form of [`RunningStats::add`]
    pub fn fold(mut self, nanos: i64) -> Self {
        self.add(nanos);
        self
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> i128 {
        self.sum
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn min(&self) -> Option<i64> {
        self.extremes.map(|e| e.min)
    }

    pub fn max(&self) -> Option<i64> {
        self.extremes.map(|e| e.max)
    }

    /// Arithmetic mean in nanoseconds
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.sum as f64 / self.count as f64)
    }
}

impl FromIterator<i64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::fold)
    }
}
