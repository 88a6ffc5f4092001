//! Instrumented selection sort over Pokédex records.
//!
//! This module provides the didactic core of pokesort:
//! - **Key extraction policies**: one pure function per [`SortMode`] turning a record into an
//!   orderable key
//! - **Selection sort engine**: an in-place O(n²) sort generic over the key function, counting
//!   comparisons and swaps
//! - **Observer port**: optional step notifications for narration, with abort support
//!
//! # Architecture
//!
//! A run looks like this:
//!
//! 1. **Copy**: the caller takes a fresh copy of the dataset
//! 2. **Select policy**: the [`SortMode`] tag picks the extraction policy
//! 3. **Sort**: [`selection_sort`] or [`selection_sort_observed`] permutes the copy in place
//! 4. **Report**: the caller times the call and renders the returned [`SortStatistics`]

pub mod keys;
pub mod observer;
pub mod selection;
pub mod stats;

pub use keys::{KeyExtractor, KeyPolicy, SortKey, SortMode};
pub use observer::{
    Labeled, Silent, SortAborted, SortObserver, StepEvent, StepKind, StepLogger, StepTrace,
    TracedStep,
};
pub use selection::{selection_sort, selection_sort_observed};
pub use stats::{SortStatistics, TimedStatistics};
