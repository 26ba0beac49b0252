//! Generator tiers keep their promises.

use super::common::{config, Interval, Percent};
use validity::laws::{produces_valid, validity_laws, GenValid};
use validity::Validity;

#[test]
fn test_percent_tiers() {
    validity_laws::<Percent>("Percent").assert_holds_with(&config());
}

#[test]
fn test_interval_tiers() {
    validity_laws::<Interval>("Interval").assert_holds_with(&config());
}

#[test]
fn test_widening_keeps_intervals_valid() {
    let law = produces_valid("widening keeps intervals valid", Interval::gen_valid, |i: &Interval| {
        Interval::new(i.lower - 1.0, i.upper + 1.0)
    });
    assert!(law.run(&config()).is_ok());
}

#[test]
fn test_swapping_bounds_is_caught() {
    let law = produces_valid("swapping keeps intervals valid", Interval::gen_valid, |i: &Interval| {
        Interval::new(i.upper + 1.0, i.lower)
    });
    let failure = law.run(&config()).unwrap_err();
    assert!(failure
        .to_string()
        .contains("Violated: the lower bound is at most the upper bound"));
    assert!(!Interval::new(1.0, 0.0).is_valid());
}
