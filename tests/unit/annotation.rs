//! Tests for the annotation layer.

use super::common::{chain, Percent};
use validity::{
    annotate, decorate, decorate_list, delve, list_index_label, Validation, Validity,
};

#[test]
fn test_annotate_valid_value() {
    assert!(annotate(&Percent(50), "share").is_valid());
}

#[test]
fn test_annotate_labels_violation() {
    let v = annotate(&Percent(150), "share");
    assert_eq!(
        v.into_violations(),
        vec![chain(&["share"], "the percentage is at most 100")]
    );
}

#[test]
fn test_delve_is_flipped_annotate() {
    assert_eq!(delve("share", &Percent(150)), annotate(&Percent(150), "share"));
}

#[test]
fn test_decorate_hand_built() {
    let inner = Validation::concat(annotate(&Percent(101), "a"), annotate(&Percent(102), "b"));
    let v = decorate("Pair", inner);
    let labels: Vec<Vec<&str>> = v.violations().iter().map(|c| c.labels()).collect();
    assert_eq!(labels, vec![vec!["Pair", "a"], vec!["Pair", "b"]]);
}

#[test]
fn test_decorate_list_index_order() {
    let items = [Percent(0), Percent(200), Percent(100), Percent(101)];
    let v = decorate_list(&items, Percent::validate);
    assert_eq!(
        v.into_violations(),
        vec![
            chain(&[list_index_label(1).as_str()], "the percentage is at most 100"),
            chain(&[list_index_label(3).as_str()], "the percentage is at most 100"),
        ]
    );
}

#[test]
fn test_decorate_list_empty_is_valid() {
    let items: [Percent; 0] = [];
    assert!(decorate_list(&items, Percent::validate).is_valid());
}

#[test]
fn test_list_index_label_text() {
    assert_eq!(list_index_label(7), "The element at index 7 in the list");
}

#[cfg(feature = "parallel")]
#[test]
fn test_decorate_list_par_matches_sequential() {
    let items: Vec<Percent> = (0..=255u8).map(Percent).collect();
    assert_eq!(
        validity::decorate_list_par(&items, Percent::validate),
        decorate_list(&items, Percent::validate)
    );
}
