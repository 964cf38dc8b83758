//! Integration tests for string similarity.

use parley_foundation::{de_plural, de_plural_similarity, similarity, subset_bonus_similarity};
use proptest::prelude::*;

#[test]
fn identical_strings_score_full() {
    assert!((similarity("Phogue", "phogue") - 100.0).abs() < f32::EPSILON);
}

#[test]
fn unrelated_strings_score_low() {
    assert!(similarity("kick", "valparaiso") < 30.0);
}

#[test]
fn plural_forms_match() {
    assert_eq!(de_plural("snipers"), "sniper");
    assert_eq!(de_plural("enemies"), "enemy");
    assert_eq!(de_plural("phogue's"), "phogue");
    assert_eq!(de_plural("gas"), "gas");
    assert!((de_plural_similarity("snipers", "sniper") - 100.0).abs() < f32::EPSILON);
}

#[test]
fn partial_alias_earns_bonus() {
    let raw = similarity("chan", "change map");
    let bonus = subset_bonus_similarity("chan", "change map");
    assert!(bonus > raw);
    assert!(bonus < 100.0);
}

#[test]
fn word_subset_earns_bonus() {
    assert!(subset_bonus_similarity("map", "change map") > similarity("map", "change map"));
}

proptest! {
    #[test]
    fn scores_are_percentages(a in ".{0,20}", b in ".{0,20}") {
        for score in [
            similarity(&a, &b),
            de_plural_similarity(&a, &b),
            subset_bonus_similarity(&a, &b),
        ] {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-z ]{0,16}", b in "[a-z ]{0,16}") {
        prop_assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < 1e-3);
    }

    #[test]
    fn refinements_never_lower_the_score(a in "[a-z ]{0,16}", b in "[a-z ]{0,16}") {
        let raw = similarity(&a, &b);
        prop_assert!(de_plural_similarity(&a, &b) >= raw);
        prop_assert!(subset_bonus_similarity(&a, &b) >= raw);
    }
}
