//! Record builders and proptest strategies.

use pokesort_lib::record::Record;
use proptest::prelude::*;

/// Builds a valid record, panicking on invalid input.
pub fn record(name: &str, stage: &str, generation: u32, hit_points: u32, types: &str) -> Record {
    Record::with_types(name, stage, generation, hit_points, types).expect("valid test record")
}

/// Names of the records, in order.
pub fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(Record::name).collect()
}

const STAGES: &[&str] = &["Basic", "Stage 1", "Stage 2", "Mega", "Baby Basic", "stage 1"];
const TYPES: &[&str] =
    &["Normal", "Fire", "Water", "Grass", "Dragon", "Fairy", "Shadow", "water", "Fire Flying"];

/// Strategy producing valid records with unique names.
pub fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            prop::sample::select(STAGES),
            1u32..10,
            1u32..256,
            prop::sample::select(TYPES),
            "[A-Za-z]{1,8}",
        ),
        0..max_len,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (stage, generation, hp, types, name))| {
                record(&format!("{name}{i}"), stage, generation, hp, types)
            })
            .collect()
    })
}
