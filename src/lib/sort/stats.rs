//! Counters accumulated by a sort run.

use std::fmt;
use std::time::Duration;

/// Comparison and swap counts for one sort call.
///
/// Zeroed at the start of a sort, incremented as the algorithm runs, and returned by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortStatistics {
    /// Key comparisons performed
    pub comparisons: u64,
    /// Element swaps performed
    pub swaps: u64,
}

impl SortStatistics {
    /// Comparisons selection sort performs on `n` elements: `n(n-1)/2`, whatever the input order.
    #[must_use]
    pub fn expected_comparisons(n: usize) -> u64 {
        let n = n as u64;
        n * n.saturating_sub(1) / 2
    }
}

impl fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} comparisons, {} swaps", self.comparisons, self.swaps)
    }
}

/// Statistics extended with caller-measured wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedStatistics {
    pub stats: SortStatistics,
    pub elapsed: Duration,
}

impl TimedStatistics {
    #[must_use]
    pub fn new(stats: SortStatistics, elapsed: Duration) -> Self {
        Self { stats, elapsed }
    }
}
