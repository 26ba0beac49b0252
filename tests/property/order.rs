//! Order and equality suites over fixtures, and a deliberately broken order.

use std::cmp::Ordering;

use proptest::prelude::*;

use super::common::{config, Percent};
use validity::laws::{eq_laws, ord_laws, ord_laws_on};
use validity::LawFailure;

#[test]
fn test_percent_total_order_on_every_tier() {
    let suite = ord_laws::<Percent>("Percent");
    assert_eq!(suite.len(), 48);
    let report = suite.run(&config());
    assert!(report.is_success(), "{}", report);
    assert!(report
        .outcome("Ord Percent / unchecked values / `<` agrees with `cmp`")
        .is_some());
}

#[test]
fn test_percent_equality_on_every_tier() {
    eq_laws::<Percent>("Percent").assert_holds_with(&config());
}

/// Rock-paper-scissors: 1 < 2, 2 < 3, 3 < 1.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cyclic(u8);

impl Ord for Cyclic {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (a, b) if a == b => Ordering::Equal,
            (1, 2) | (2, 3) | (3, 1) => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

impl PartialOrd for Cyclic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn test_cyclic_order_fails_transitivity() {
    let report = ord_laws_on("Cyclic", || (1u8..=3).prop_map(Cyclic)).run(&config());

    let outcome = report.outcome("Cyclic / `≤` is transitive").unwrap();
    let failure: &LawFailure = outcome.result.as_ref().unwrap_err();
    assert_eq!(failure.law(), "`≤` is transitive");
    let cycles = [
        "(Cyclic(1), Cyclic(2), Cyclic(3))",
        "(Cyclic(2), Cyclic(3), Cyclic(1))",
        "(Cyclic(3), Cyclic(1), Cyclic(2))",
    ];
    assert!(
        cycles.contains(&failure.counterexample().unwrap()),
        "unexpected counterexample: {}",
        failure
    );

    // Everything that does not chain comparisons still holds.
    assert!(report
        .outcome("Cyclic / `≤` agrees with `cmp`")
        .unwrap()
        .result
        .is_ok());
    assert_eq!(report.failed(), 4);
}
