//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use proptest::prelude::*;
use validity::laws::LawConfig;
use validity::{Validation, ViolationChain};

// Re-export canonical fixtures from validity::testing
pub use validity::testing::{finite_bound, Interval, ParsePercentError, Percent};

/// Law configuration for integration tests: fixed seed, moderate sample count.
pub fn config() -> LawConfig {
    LawConfig::default().with_cases(128).deterministic()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Violation chains up to three labels deep over small alphabets, so equal chains
/// come up often enough to matter.
pub fn chain_strategy() -> impl Strategy<Value = ViolationChain> {
    let leaf = "[a-c]{1,2}".prop_map(ViolationChain::Violated);
    leaf.prop_recursive(3, 8, 1, |inner| {
        ("[x-z]", inner).prop_map(|(label, child)| child.located(label))
    })
}

pub fn validation_strategy() -> impl Strategy<Value = Validation> {
    prop::collection::vec(chain_strategy(), 0..4).prop_map(Validation::from_violations)
}

/// A chain built from explicit labels, outermost first.
pub fn chain(labels: &[&str], reason: &str) -> ViolationChain {
    labels
        .iter()
        .rev()
        .fold(ViolationChain::Violated(reason.to_string()), |chain, label| {
            chain.located(*label)
        })
}
