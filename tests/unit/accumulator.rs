//! Tests for the accumulator and the invariant DSL.

use super::common::chain;
use validity::{check, declare, invalid, trivial_validation, valid, Validation, ViolationChain};

// ============================================================================
// DSL
// ============================================================================

#[test]
fn test_check_true_is_identity() {
    assert_eq!(check(true, "anything"), Validation::empty());
    assert_eq!(declare("anything", true), Validation::empty());
}

#[test]
fn test_check_false_is_single_violation() {
    let v = check(false, "the list is sorted");
    assert_eq!(
        v.violations(),
        &[ViolationChain::Violated("the list is sorted".to_string())]
    );
    assert_eq!(declare("the list is sorted", false), v);
}

#[test]
fn test_valid_and_invalid() {
    assert!(valid().is_valid());
    assert_eq!(invalid("x is even"), check(false, "x is even"));
}

#[test]
fn test_trivial_validation_is_identity() {
    assert_eq!(trivial_validation(&3.5f64), valid());
    assert_eq!(trivial_validation("text"), valid());
}

// ============================================================================
// CONCATENATION
// ============================================================================

#[test]
fn test_concat_preserves_order() {
    let v = Validation::concat(
        Validation::concat(invalid("a"), valid()),
        Validation::concat(invalid("b"), invalid("c")),
    );
    let reasons: Vec<&str> = v.violations().iter().map(ViolationChain::reason).collect();
    assert_eq!(reasons, vec!["a", "b", "c"]);
}

#[test]
fn test_collect_matches_concat_all() {
    let parts = vec![invalid("a"), valid(), invalid("b")];
    let collected: Validation = parts.clone().into_iter().collect();
    assert_eq!(collected, Validation::concat_all(parts));
    assert_eq!(collected.len(), 2);
}

#[test]
fn test_decorate_wraps_every_chain() {
    let v = Validation::concat(invalid("a"), invalid("b")).decorate("outer");
    assert_eq!(
        v.into_violations(),
        vec![chain(&["outer"], "a"), chain(&["outer"], "b")]
    );
}

#[test]
fn test_decorate_empty_stays_empty() {
    assert_eq!(valid().decorate("outer"), valid());
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn test_chain_accessors() {
    let c = chain(&["Interval", "lower"], "the bound is finite");
    assert_eq!(c.reason(), "the bound is finite");
    assert_eq!(c.labels(), vec!["Interval", "lower"]);
    assert_eq!(c.depth(), 2);
    assert_eq!(
        c,
        ViolationChain::Location(
            "Interval".to_string(),
            Box::new(ViolationChain::Location(
                "lower".to_string(),
                Box::new(ViolationChain::Violated("the bound is finite".to_string())),
            )),
        )
    );
}
