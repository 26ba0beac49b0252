//! Tests for the standard library `Validity` implementations.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::common::Percent;
use validity::{is_invalid, is_valid, validate_not_infinite, validate_not_nan, Validity};

#[test]
fn test_scalars_are_trivially_valid() {
    assert!(is_valid(&()));
    assert!(is_valid(&true));
    assert!(is_valid(&'x'));
    assert!(is_valid(&u128::MAX));
    assert!(is_valid(&i8::MIN));
    assert!(is_valid(&f64::NAN));
    assert!(is_valid(&std::cmp::Ordering::Less));
}

#[test]
fn test_float_helpers() {
    assert!(validate_not_nan(1.0).is_valid());
    assert_eq!(validate_not_nan(f64::NAN).violations()[0].reason(), "the value is not NaN");
    assert!(validate_not_infinite(f64::MAX).is_valid());
    assert!(!validate_not_infinite(f64::NEG_INFINITY).is_valid());
}

#[test]
fn test_smart_pointers_are_transparent() {
    let bad = Percent(101);
    let expected = bad.validate();
    assert_eq!(Box::new(bad).validate(), expected);
    assert_eq!(Rc::new(bad).validate(), expected);
    assert_eq!(Arc::new(bad).validate(), expected);
    assert_eq!((&bad).validate(), expected);
}

#[test]
fn test_option_only_checks_some() {
    assert!(is_valid(&None::<Percent>));
    let v = Some(Percent(101)).validate();
    assert_eq!(v.violations()[0].labels(), vec!["Some"]);
}

#[test]
fn test_nested_containers() {
    let value: Vec<Option<Percent>> = vec![None, Some(Percent(5)), Some(Percent(250))];
    let v = value.validate();
    assert_eq!(v.len(), 1);
    assert_eq!(
        v.violations()[0].labels(),
        vec!["The element at index 2 in the list", "Some"]
    );
}

#[test]
fn test_vec_deque_uses_list_labels() {
    let value: VecDeque<Percent> = [Percent(101), Percent(1)].into_iter().collect();
    assert_eq!(
        value.validate().violations()[0].labels(),
        vec!["The element at index 0 in the list"]
    );
}

#[test]
fn test_maps_and_sets() {
    let mut map = BTreeMap::new();
    map.insert(Percent(1), Percent(102));
    map.insert(Percent(103), Percent(2));
    let v = map.validate();
    assert_eq!(v.len(), 2);
    assert_eq!(v.violations()[0].labels(), vec!["The value at key index 0 in the map"]);
    assert_eq!(v.violations()[1].labels(), vec!["The key at index 1 in the map"]);

    let set: BTreeSet<Percent> = [Percent(0), Percent(200)].into_iter().collect();
    assert_eq!(
        set.validate().violations()[0].labels(),
        vec!["The element at index 1 in the set"]
    );

    let mut hashed = HashMap::new();
    hashed.insert("only", Percent(250));
    assert!(is_invalid(&hashed));
}

#[test]
fn test_tuples_label_positions() {
    let v = (Percent(1), Percent(101), Percent(102)).validate();
    let labels: Vec<Vec<&str>> = v.violations().iter().map(|c| c.labels()).collect();
    assert_eq!(
        labels,
        vec![
            vec!["The second element of the tuple"],
            vec!["The third element of the tuple"],
        ]
    );
}
