//! Operation counters for benchmarking algorithms.
//!
//! A [`Counters`] value is owned by the caller and lent to an algorithm as
//! `&mut Counters`, so every benchmark run has its own instance and nothing is
//! shared between runs unless the caller decides so.

use std::fmt;

use mem_dbg::{MemDbg, MemSize};
use serde::{Deserialize, Serialize};

/// Accumulates the number of comparisons, swaps and array accesses performed
/// by an algorithm.
///
/// Counters start at zero and only grow until [`reset`](Counters::reset) is
/// called. Algorithms never reset them on their own.
///
/// # Examples
/// ```
/// use majority::{Counters, Report};
///
/// let mut counters = Counters::new();
/// counters.increment_comparisons();
/// counters.increment_array_accesses();
/// counters.increment_array_accesses();
///
/// let report = counters.report();
/// assert_eq!(report.comparisons, 1);
/// assert_eq!(report.swaps, 0);
/// assert_eq!(report.array_accesses, 2);
///
/// counters.reset();
/// assert_eq!(counters.report(), Report::default());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, MemSize, MemDbg)]
pub struct Counters {
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
}

impl Counters {
    /// Creates a new set of counters, all set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn increment_comparisons(&mut self) {
        self.comparisons += 1;
    }

    #[inline(always)]
    pub fn increment_swaps(&mut self) {
        self.swaps += 1;
    }

    #[inline(always)]
    pub fn increment_array_accesses(&mut self) {
        self.array_accesses += 1;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    /// Returns a snapshot of the current values. The counters are left untouched.
    pub fn report(&self) -> Report {
        Report {
            comparisons: self.comparisons,
            swaps: self.swaps,
            array_accesses: self.array_accesses,
        }
    }

    /// Sets every counter back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A point-in-time copy of a [`Counters`] value.
///
/// The [`Display`](fmt::Display) implementation prints one counter per line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub comparisons: u64,
    pub swaps: u64,
    pub array_accesses: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparisons: {}", self.comparisons)?;
        writeln!(f, "Swaps: {}", self.swaps)?;
        write!(f, "Array accesses: {}", self.array_accesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_counters_are_zero() {
        let c = Counters::new();
        assert_eq!(c.comparisons(), 0);
        assert_eq!(c.swaps(), 0);
        assert_eq!(c.array_accesses(), 0);
    }

    #[test]
    fn increments_are_independent() {
        let mut c = Counters::new();
        for _ in 0..3 {
            c.increment_comparisons();
        }
        c.increment_swaps();
        for _ in 0..5 {
            c.increment_array_accesses();
        }
        assert_eq!(
            c.report(),
            Report {
                comparisons: 3,
                swaps: 1,
                array_accesses: 5
            }
        );
    }

    #[test]
    fn report_does_not_mutate() {
        let mut c = Counters::new();
        c.increment_comparisons();
        let first = c.report();
        let second = c.report();
        assert_eq!(first, second);
        assert_eq!(c.comparisons(), 1);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut c = Counters::new();
        for _ in 0..1000 {
            c.increment_comparisons();
            c.increment_swaps();
            c.increment_array_accesses();
        }
        c.reset();
        assert_eq!(c, Counters::new());
        assert_eq!(c.report(), Report::default());

        // resetting twice is the same as resetting once
        c.reset();
        assert_eq!(c.report(), Report::default());
    }

    #[test]
    fn display_lists_each_counter() {
        let report = Report {
            comparisons: 7,
            swaps: 0,
            array_accesses: 7,
        };
        assert_eq!(
            report.to_string(),
            "Comparisons: 7\nSwaps: 0\nArray accesses: 7"
        );
    }

    #[test]
    fn report_serializes_field_names() {
        let mut c = Counters::new();
        c.increment_array_accesses();
        let json = serde_json::to_string(&c.report()).unwrap();
        assert_eq!(
            json,
            r#"{"comparisons":0,"swaps":0,"array_accesses":1}"#
        );
    }
}
