//! Property tests for the selection sort engine and the record key policies.

use pokesort_lib::record::Record;
use pokesort_lib::sort::{
    SortMode, SortObserver, SortStatistics, StepEvent, StepKind, StepTrace, selection_sort,
    selection_sort_observed,
};
use proptest::prelude::*;

use crate::helpers::records::arb_records;

type Item = (u8, usize);

/// Tags each key with its input position so equal keys stay distinguishable.
fn tagged(keys: &[u8]) -> Vec<Item> {
    keys.iter().copied().zip(0..).collect()
}

fn key(item: &Item) -> u8 {
    item.0
}

/// Checks that each pass places the earliest of the equal minima of its suffix.
#[derive(Default)]
struct PlacementCheck {
    expected: Option<Item>,
}

impl SortObserver<Item> for PlacementCheck {
    type Error = String;

    fn on_step(&mut self, event: &StepEvent<'_, Item>) -> Result<(), String> {
        match event.kind {
            StepKind::PassStart => {
                let suffix = &event.items[event.boundary..];
                let min = suffix.iter().map(key).min();
                self.expected = suffix.iter().copied().find(|item| Some(item.0) == min);
            }
            StepKind::PassSummary => {
                let placed = event.items[event.boundary];
                if self.expected != Some(placed) {
                    return Err(format!(
                        "pass {} placed {placed:?}, expected {:?}",
                        event.pass_number(),
                        self.expected
                    ));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

proptest! {
    #[test]
    fn proptest_output_is_sorted_permutation(keys in prop::collection::vec(any::<u8>(), 0..64)) {
        let input = tagged(&keys);
        let mut items = input.clone();
        selection_sort(&mut items, key);

        prop_assert!(items.windows(2).all(|w| w[0].0 <= w[1].0));

        let mut sorted_input = input;
        sorted_input.sort_unstable();
        let mut sorted_output = items;
        sorted_output.sort_unstable();
        prop_assert_eq!(sorted_input, sorted_output);
    }

    #[test]
    fn proptest_counters(keys in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut items = tagged(&keys);
        let n = items.len();
        let stats = selection_sort(&mut items, key);

        prop_assert_eq!(stats.comparisons, SortStatistics::expected_comparisons(n));
        prop_assert!(stats.swaps <= n.saturating_sub(1) as u64);
    }

    #[test]
    fn proptest_sorting_twice_changes_nothing(keys in prop::collection::vec(0u8..8, 0..64)) {
        let mut items = tagged(&keys);
        selection_sort(&mut items, key);
        let once = items.clone();

        let stats = selection_sort(&mut items, key);
        prop_assert_eq!(stats.swaps, 0);
        prop_assert_eq!(items, once);
    }

    #[test]
    fn proptest_first_minimum_is_placed(keys in prop::collection::vec(0u8..4, 0..48)) {
        let mut items = tagged(&keys);
        let result = selection_sort_observed(&mut items, key, &mut PlacementCheck::default());
        prop_assert!(result.is_ok(), "{:?}", result.err().map(|e| e.error));
    }

    #[test]
    fn proptest_trace_agrees_with_counters(keys in prop::collection::vec(any::<u8>(), 1..32)) {
        let mut items = tagged(&keys);
        let mut trace = StepTrace::new();
        let stats = selection_sort_observed(&mut items, key, &mut trace).unwrap();

        prop_assert_eq!(trace.count(StepKind::PassStart), keys.len());
        prop_assert_eq!(trace.count(StepKind::PassSummary), keys.len() - 1);
        prop_assert_eq!(trace.count(StepKind::Comparing) as u64, stats.comparisons);
        prop_assert_eq!(trace.count(StepKind::PreSwap) as u64, stats.swaps);
        prop_assert_eq!(trace.steps.last().map(|s| s.stats), Some(stats));
    }

    #[test]
    fn proptest_every_mode_orders_records(records in arb_records(32)) {
        for mode in SortMode::ALL {
            let mut sorted: Vec<Record> = records.clone();
            selection_sort(&mut sorted, mode);

            let policy = mode.policy();
            prop_assert!(
                sorted.windows(2).all(|w| policy(&w[0]) <= policy(&w[1])),
                "{} left records out of order",
                mode.title()
            );
            prop_assert_eq!(sorted.len(), records.len());
        }
    }
}
