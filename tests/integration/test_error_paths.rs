//! Error path integration tests.
//!
//! These tests verify that invalid records, bad parameters and aborted sorts are reported
//! with useful messages.

use pokesort_lib::PokesortError;
use pokesort_lib::record::{PokemonType, Record};
use pokesort_lib::sort::{SortMode, SortStatistics, selection_sort_observed};
use pokesort_lib::terminal::{NarratorError, NarratorOptions, ScriptedScreen, StepNarrator};
use pokesort_lib::validation::validate_choice;
use rstest::rstest;

use crate::helpers::records::record;

// ==================== Record Validation ====================

#[rstest]
#[case("", "Basic", 1, 10, "Fire", "name")]
#[case("Blank Stage", " ", 1, 10, "Fire", "stage")]
#[case("Gen Zero", "Basic", 0, 10, "Fire", "generation")]
#[case("No Health", "Basic", 1, 0, "Fire", "hit_points")]
#[case("Typeless", "Basic", 1, 10, "   ", "type tag")]
fn test_invalid_records(
    #[case] name: &str,
    #[case] stage: &str,
    #[case] generation: u32,
    #[case] hit_points: u32,
    #[case] types: &str,
    #[case] mentions: &str,
) {
    let err = Record::with_types(name, stage, generation, hit_points, types).unwrap_err();
    assert!(matches!(err, PokesortError::InvalidRecord { .. }), "unexpected error: {err:?}");
    assert!(err.to_string().contains(mentions), "'{err}' should mention {mentions}");
}

#[test]
fn test_blank_tag_in_list() {
    let err = Record::new("Odd", "Basic", 1, 10, vec!["Fire".to_string(), String::new()])
        .unwrap_err();
    assert!(err.to_string().contains("Invalid record 'Odd'"));
}

#[test]
fn test_unknown_type_name() {
    let err = "Shadow".parse::<PokemonType>().unwrap_err();
    assert!(matches!(err, PokesortError::InvalidParameter { .. }));
}

// ==================== Menu Input ====================

#[rstest]
#[case("")]
#[case("7")]
#[case("one")]
#[case("-1")]
fn test_invalid_menu_choice(#[case] input: &str) {
    let err = validate_choice(input, &["0", "1", "2"], "choice").unwrap_err();
    assert!(err.to_string().contains("is not one of [0, 1, 2]"));
}

// ==================== Aborted Sorts ====================

#[test]
fn test_quit_mid_pass_keeps_a_permutation() {
    let mut records = vec![
        record("Charizard", "Stage 2", 1, 78, "Fire Flying"),
        record("Abra", "Basic", 1, 25, "Psychic"),
        record("Eevee", "Basic", 1, 55, "Normal"),
    ];
    let original = records.clone();

    // Pass 1 for HP: PassStart, Comparing, NewMinimum, Comparing, PreSwap, PassSummary.
    // Quitting at the summary leaves the first swap applied.
    let mut screen = ScriptedScreen::new(["", "", "", "", "", "q"]);
    let err = selection_sort_observed(
        &mut records,
        SortMode::HitPoints,
        &mut StepNarrator::new(&mut screen, NarratorOptions { pause: true, clear: false }),
    )
    .unwrap_err();

    assert!(matches!(err.error, NarratorError::Aborted));
    assert_eq!(err.stats, SortStatistics { comparisons: 2, swaps: 1 });
    assert_eq!(records[0].name(), "Abra");
    for record in &original {
        assert!(records.contains(record));
    }
    assert!(err.to_string().contains("2 comparisons, 1 swaps"));
}
