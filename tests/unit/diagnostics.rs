//! Golden tests for the diagnostics text format.

use super::common::{Interval, Percent};
use validity::{construct_valid, pretty_validate, render, valid, Validity};

#[test]
fn test_render_identity_is_absent() {
    assert_eq!(render(&valid()), None);
}

#[test]
fn test_render_interval_golden() {
    let text = render(&Interval::new(f64::NAN, 1.0).validate()).unwrap();
    assert_eq!(
        text,
        "Interval\n \\ lower\n  \\ Violated: the bound is finite\n\
         Interval\n \\ Violated: the lower bound is at most the upper bound"
    );
}

#[test]
fn test_render_unordered_interval() {
    let text = render(&Interval::new(2.0, 1.0).validate()).unwrap();
    assert_eq!(
        text,
        "Interval\n \\ Violated: the lower bound is at most the upper bound"
    );
}

#[test]
fn test_render_nested_containers_golden() {
    let value = vec![Some(Percent(1)), Some(Percent(120))];
    assert_eq!(
        render(&value.validate()).unwrap(),
        "The element at index 1 in the list\n \\ Some\n  \\ Violated: the percentage is at most 100"
    );
}

#[test]
fn test_interval_valid_construction() {
    assert_eq!(
        construct_valid(Interval::new(-1.0, 1.0)),
        Some(Interval::new(-1.0, 1.0))
    );
    assert!(pretty_validate(Interval::new(0.0, f64::INFINITY)).is_err());
}

#[test]
#[should_panic(expected = "Interval { lower: 3.0, upper: 1.0 } is not valid:\nInterval\n \\ Violated")]
fn test_construct_valid_unsafe_message() {
    validity::construct_valid_unsafe(Interval::new(3.0, 1.0));
}
