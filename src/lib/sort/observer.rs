//! Step notifications emitted by the selection sort engine.
//!
//! The engine reports progress through the [`SortObserver`] port. Observers receive a borrowed
//! [`StepEvent`] snapshot between logical steps and may block (e.g. to wait for a key press) or
//! return an error to stop the sort. Numeric results never depend on whether an observer is
//! attached.

use std::convert::Infallible;

use log::info;
use thiserror::Error;

use super::stats::SortStatistics;
use crate::record::Record;

/// The point in the algorithm at which an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Start of a pass, before the inner loop. Fires for every pass, including the last.
    PassStart,
    /// About to compare `compare_index` with the current minimum.
    Comparing,
    /// `compare_index` became the new minimum.
    NewMinimum,
    /// About to swap the minimum into the boundary position. The slice is still unswapped.
    PreSwap,
    /// A pass finished. Not emitted after the final pass.
    PassSummary,
}

/// Snapshot of the sort state handed to observers.
#[derive(Debug)]
pub struct StepEvent<'a, T> {
    /// The whole sequence in its current order
    pub items: &'a [T],
    pub kind: StepKind,
    /// Outer-loop index; `items[..boundary]` is already sorted
    pub boundary: usize,
    /// Index of the current candidate minimum
    pub min_index: usize,
    /// Index being compared against the minimum, if any
    pub compare_index: Option<usize>,
    /// Counters including the step being reported
    pub stats: SortStatistics,
}

impl<T> StepEvent<'_, T> {
    /// One-based pass number.
    #[must_use]
    pub fn pass_number(&self) -> usize {
        self.boundary + 1
    }

    /// Number of passes, which equals the sequence length.
    #[must_use]
    pub fn total_passes(&self) -> usize {
        self.items.len()
    }
}

/// Items that can be named in step narration.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for Record {
    fn label(&self) -> &str {
        self.name()
    }
}

impl<T: Labeled> StepEvent<'_, T> {
    fn label_at(&self, index: Option<usize>) -> &str {
        index.and_then(|i| self.items.get(i)).map_or("?", Labeled::label)
    }

    /// Human-readable narration of this step.
    #[must_use]
    pub fn description(&self) -> String {
        let pass = self.pass_number();
        let total = self.total_passes();
        match self.kind {
            StepKind::PassStart => {
                format!("Pass {pass}/{total}: Finding minimum in unsorted portion...")
            }
            StepKind::Comparing => format!(
                "Pass {pass}/{total}: Comparing {} with current min {}",
                self.label_at(self.compare_index),
                self.label_at(Some(self.min_index))
            ),
            StepKind::NewMinimum => format!(
                "Pass {pass}/{total}: New minimum found: {}",
                self.label_at(Some(self.min_index))
            ),
            StepKind::PreSwap => {
                format!("Pass {pass}/{total}: Swapping to place minimum in sorted position")
            }
            StepKind::PassSummary => format!("Pass {pass}/{total} completed"),
        }
    }
}

/// Receiver of step notifications.
///
/// Returning `Err` aborts the sort immediately; the engine wraps the error in [`SortAborted`]
/// together with the counters reached so far.
pub trait SortObserver<T> {
    type Error;

    /// Called synchronously at each step.
    ///
    /// # Errors
    ///
    /// Any error stops the sort before the next step runs.
    fn on_step(&mut self, event: &StepEvent<'_, T>) -> Result<(), Self::Error>;
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<T> SortObserver<T> for Silent {
    type Error = Infallible;

    fn on_step(&mut self, _event: &StepEvent<'_, T>) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Observer that narrates each step to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepLogger;

impl<T: Labeled> SortObserver<T> for StepLogger {
    type Error = Infallible;

    fn on_step(&mut self, event: &StepEvent<'_, T>) -> Result<(), Infallible> {
        info!("{} [{}]", event.description(), event.stats);
        Ok(())
    }
}

/// A recorded step, without the sequence snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracedStep {
    pub kind: StepKind,
    pub boundary: usize,
    pub min_index: usize,
    pub compare_index: Option<usize>,
    pub stats: SortStatistics,
}

/// Observer that records every step it sees.
#[derive(Debug, Clone, Default)]
pub struct StepTrace {
    pub steps: Vec<TracedStep>,
}

impl StepTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps of the given kind.
    #[must_use]
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// The recorded kinds, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }
}

impl<T> SortObserver<T> for StepTrace {
    type Error = Infallible;

    fn on_step(&mut self, event: &StepEvent<'_, T>) -> Result<(), Infallible> {
        self.steps.push(TracedStep {
            kind: event.kind,
            boundary: event.boundary,
            min_index: event.min_index,
            compare_index: event.compare_index,
            stats: event.stats,
        });
        Ok(())
    }
}

/// A sort stopped by its observer.
///
/// The sequence is left as a valid permutation of its input; `stats` holds the counters at the
/// step where the observer failed.
#[derive(Error, Debug)]
#[error("sort aborted after {stats}")]
pub struct SortAborted<E> {
    #[source]
    pub error: E,
    pub stats: SortStatistics,
}
