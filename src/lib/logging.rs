//! Logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly logging for operation timing and sort
//! summaries.

use std::time::{Duration, Instant};

use crate::sort::{SortMode, SortStatistics};

/// Formats an elapsed wall time the way the statistics block shows it.
///
/// Durations under one second are shown in milliseconds with two decimals, longer ones in
/// seconds with four.
///
/// # Examples
///
/// ```
/// use pokesort_lib::logging::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_micros(1500)), "1.50 milliseconds");
/// assert_eq!(format_elapsed(Duration::from_millis(2500)), "2.5000 seconds");
/// ```
#[must_use]
pub fn format_elapsed(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2} milliseconds", secs * 1000.0)
    } else {
        format!("{secs:.4} seconds")
    }
}

/// Logs a formatted summary of a finished sort.
///
/// # Examples
///
/// ```
/// use pokesort_lib::logging::log_sort_summary;
/// use pokesort_lib::sort::{SortMode, SortStatistics};
///
/// log_sort_summary(SortMode::HitPoints, 18, &SortStatistics { comparisons: 153, swaps: 15 });
/// ```
pub fn log_sort_summary(mode: SortMode, records: usize, stats: &SortStatistics) {
    log::info!("Sort Summary ({}):", mode.title());
    log::info!("  Records: {records}");
    log::info!("  Comparisons: {}", stats.comparisons);
    log::info!("  Swaps: {}", stats.swaps);
}

/// Operation timing and summary helper.
///
/// Tracks operation timing and provides formatted summary output.
///
/// # Examples
///
/// ```no_run
/// use pokesort_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Sorting records");
///
/// // ... do work ...
///
/// timer.log_completion(18);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Time since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the completion with record count and elapsed time.
    pub fn log_completion(&self, count: usize) {
        log::info!(
            "{} completed: {count} records in {}",
            self.operation,
            format_elapsed(self.elapsed())
        );
    }
}
