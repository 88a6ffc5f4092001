//! End-to-end sorting of the embedded Pokédex and small hand-built record sets.

use pokesort_lib::dataset::pokedex;
use pokesort_lib::record::{EvolutionStage, Record};
use pokesort_lib::sort::{SortMode, SortStatistics, selection_sort};
use rstest::rstest;

use crate::helpers::records::{names, record};

#[rstest]
#[case(SortMode::Stage)]
#[case(SortMode::Generation)]
#[case(SortMode::HitPoints)]
#[case(SortMode::Type)]
#[case(SortMode::Name)]
fn test_every_mode_sorts_the_pokedex(#[case] mode: SortMode) {
    let original = pokedex().unwrap();
    let mut records = original.clone();
    let stats = selection_sort(&mut records, mode);

    assert_eq!(stats.comparisons, 153);
    assert!(stats.swaps <= 17);
    assert_eq!(records.len(), original.len());
    for record in &original {
        assert!(records.contains(record), "{} went missing", record.name());
    }

    // Each call starts from a fresh copy.
    assert_eq!(pokedex().unwrap(), original);
}

#[test]
fn test_hit_points_order() {
    let mut records = pokedex().unwrap();
    selection_sort(&mut records, SortMode::HitPoints);

    let sorted = names(&records);
    assert_eq!(&sorted[..4], ["Abra", "Pikachu", "Charmander", "Riolu"]);
    assert_eq!(sorted.last(), Some(&"Tyranitar"));
    assert!(records.windows(2).all(|w| w[0].hit_points() <= w[1].hit_points()));
}

#[test]
fn test_name_order() {
    let mut records = pokedex().unwrap();
    selection_sort(&mut records, SortMode::Name);
    assert_eq!(names(&records)[..3], ["Abra", "Blaziken", "Bulbasaur"]);
    assert_eq!(names(&records).last(), Some(&"Zoroark"));
}

#[test]
fn test_stage_order() {
    let mut records = pokedex().unwrap();
    selection_sort(&mut records, SortMode::Stage);

    let stages: Vec<EvolutionStage> = records.iter().map(Record::stage).collect();
    let basics = stages.iter().filter(|s| **s == EvolutionStage::Basic).count();
    assert_eq!(basics, 6);
    assert!(stages.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(stages.last(), Some(&EvolutionStage::Stage2));
}

#[test]
fn test_type_order_uses_primary_type_only() {
    let mut records = vec![
        record("Mystery", "Basic", 1, 10, "Shadow"),
        record("Squirtle", "Basic", 1, 44, "Water"),
        record("Charizard", "Stage 2", 1, 78, "Fire Flying"),
        record("Rattata", "Basic", 1, 30, "Normal"),
    ];
    selection_sort(&mut records, SortMode::Type);
    assert_eq!(names(&records), ["Rattata", "Charizard", "Squirtle", "Mystery"]);
}

#[test]
fn test_type_tags_are_case_sensitive() {
    let mut records =
        vec![record("Lowercase", "Basic", 1, 10, "water"), record("Proper", "Basic", 1, 10, "Water")];
    selection_sort(&mut records, SortMode::Type);
    assert_eq!(names(&records), ["Proper", "Lowercase"]);
}

#[test]
fn test_stage_label_matching() {
    let mut records = vec![
        record("Mega", "Mega Evolution", 6, 100, "Fire"),
        record("Later", "Evolves at Stage 2", 3, 90, "Water"),
        record("Middle", "Stage 1", 2, 50, "Grass"),
        record("First", "Basic", 1, 20, "Normal"),
    ];
    let stats = selection_sort(&mut records, SortMode::Stage);
    assert_eq!(names(&records), ["First", "Middle", "Later", "Mega"]);
    assert_eq!(stats, SortStatistics { comparisons: 6, swaps: 2 });
}

#[test]
fn test_sort_by_generation_keeps_first_minimum_first() {
    let mut records = vec![
        record("Sixth", "Basic", 6, 10, "Water"),
        record("FirstA", "Basic", 1, 10, "Water"),
        record("FirstB", "Basic", 1, 10, "Water"),
    ];
    selection_sort(&mut records, SortMode::Generation);
    assert_eq!(names(&records)[0], "FirstA");
}
