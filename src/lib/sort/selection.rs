//! Instrumented in-place selection sort.
//!
//! Each pass scans the unsorted suffix for its minimum and swaps it to the front of the suffix.
//! The engine counts every key comparison and every swap, and optionally reports each step to a
//! [`SortObserver`].
//!
//! Comparisons use strict less-than, so among equal keys the earliest one stays the minimum.
//! The swap that places the minimum may still carry the displaced element past equal keys, so
//! the sort as a whole is not stable.

use log::debug;

use super::keys::KeyExtractor;
use super::observer::{Silent, SortAborted, SortObserver, StepEvent, StepKind};
use super::stats::SortStatistics;

/// Sorts `items` in place by the key `extract` returns, without narration.
///
/// Always performs `n(n-1)/2` comparisons and at most `n-1` swaps.
///
/// # Example
/// ```
/// use pokesort_lib::sort::selection_sort;
///
/// let mut values = [3, 1, 2];
/// let stats = selection_sort(&mut values, |v: &i32| *v);
/// assert_eq!(values, [1, 2, 3]);
/// assert_eq!(stats.comparisons, 3);
/// assert_eq!(stats.swaps, 2);
/// ```
pub fn selection_sort<T, E>(items: &mut [T], extract: E) -> SortStatistics
where
    E: KeyExtractor<T>,
{
    match selection_sort_observed(items, extract, &mut Silent) {
        Ok(stats) => stats,
        Err(aborted) => match aborted.error {},
    }
}

/// Sorts `items` in place, reporting every step to `observer`.
///
/// Events fire in this order for each boundary `i`:
/// [`StepKind::PassStart`], then per inner iteration [`StepKind::Comparing`] and possibly
/// [`StepKind::NewMinimum`], then [`StepKind::PreSwap`] if the minimum is not already at `i`,
/// then [`StepKind::PassSummary`] unless `i` is the last index.
///
/// # Errors
///
/// Returns [`SortAborted`] as soon as the observer returns an error. The slice is left as a
/// permutation of the input and the counters reflect progress up to the failed step.
pub fn selection_sort_observed<T, E, O>(
    items: &mut [T],
    extract: E,
    observer: &mut O,
) -> Result<SortStatistics, SortAborted<O::Error>>
where
    E: KeyExtractor<T>,
    O: SortObserver<T> + ?Sized,
{
    let n = items.len();
    let mut stats = SortStatistics::default();

    for boundary in 0..n {
        let mut min_index = boundary;
        notify(observer, items, StepKind::PassStart, boundary, min_index, None, stats)?;

        for candidate in (boundary + 1)..n {
            stats.comparisons += 1;
            notify(
                observer,
                items,
                StepKind::Comparing,
                boundary,
                min_index,
                Some(candidate),
                stats,
            )?;

            if extract.key_less(&items[candidate], &items[min_index]) {
                min_index = candidate;
                notify(
                    observer,
                    items,
                    StepKind::NewMinimum,
                    boundary,
                    min_index,
                    Some(candidate),
                    stats,
                )?;
            }
        }

        if min_index != boundary {
            stats.swaps += 1;
            notify(observer, items, StepKind::PreSwap, boundary, min_index, None, stats)?;
            items.swap(boundary, min_index);
        }

        debug!("Pass {}/{n}: minimum from index {min_index} placed at {boundary}", boundary + 1);

        if boundary + 1 < n {
            // The minimum now sits at the boundary.
            notify(observer, items, StepKind::PassSummary, boundary, boundary, None, stats)?;
        }
    }

    Ok(stats)
}

#[allow(clippy::too_many_arguments)]
fn notify<T, O>(
    observer: &mut O,
    items: &[T],
    kind: StepKind,
    boundary: usize,
    min_index: usize,
    compare_index: Option<usize>,
    stats: SortStatistics,
) -> Result<(), SortAborted<O::Error>>
where
    O: SortObserver<T> + ?Sized,
{
    let event = StepEvent { items, kind, boundary, min_index, compare_index, stats };
    observer.on_step(&event).map_err(|error| SortAborted { error, stats })
}
