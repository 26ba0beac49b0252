// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Total-order laws.
//!
//! | Operator | Laws                                                       |
//! |----------|------------------------------------------------------------|
//! | `≤`, `≥` | reflexive, antisymmetric, transitive, agrees with `cmp`    |
//! | `<`, `>` | antireflexive, transitive, agrees with `cmp`               |
//! | `min`    | agrees with `if a ≤ b { a } else { b }`                    |
//! | `max`    | agrees with `if a ≥ b { a } else { b }`                    |
//!
//! [`ord_laws`] instantiates the whole table once per interface tier, giving three
//! independently named groups.

use std::cmp::Ordering;
use std::fmt::Debug;

use proptest::arbitrary::Arbitrary;

use super::generator::{
    interface_generators, pairs, share, shared, GenValid, Generator, SharedGenerator,
};
use super::relations::{antireflexivity, antisymmetry, equivalence, reflexivity, transitivity};
use super::scenario::{Scenario, Suite};

/// The order laws over the valid, unchecked and arbitrary tiers of `T`.
pub fn ord_laws<T>(type_name: &str) -> Suite
where
    T: GenValid + Arbitrary + Ord + Clone,
    T::Strategy: 'static,
{
    interface_generators::<T>().into_iter().fold(
        Suite::new(format!("Ord {}", type_name)),
        |suite, (tier, generator)| suite.group(order_group(tier.label(), &generator)),
    )
}

/// The order laws over a single generator.
pub fn ord_laws_on<T, G>(name: impl Into<String>, generator: G) -> Suite
where
    T: Debug + Ord + Clone + 'static,
    G: Generator<T> + 'static,
{
    order_group(name, &share(generator))
}

fn order_group<T>(name: impl Into<String>, generator: &SharedGenerator<T>) -> Suite
where
    T: Debug + Ord + Clone + 'static,
{
    let on = || shared(generator);

    Suite::new(name)
        .scenario(reflexivity("`≤` is reflexive", on(), |a: &T, b: &T| a <= b))
        .scenario(antisymmetry("`≤` is antisymmetric", on(), |a: &T, b: &T| a <= b))
        .scenario(transitivity("`≤` is transitive", on(), |a: &T, b: &T| a <= b))
        .scenario(equivalence(
            "`≤` agrees with `cmp`",
            on(),
            |a: &T, b: &T| a <= b,
            |a: &T, b: &T| a.cmp(b) != Ordering::Greater,
        ))
        .scenario(reflexivity("`≥` is reflexive", on(), |a: &T, b: &T| a >= b))
        .scenario(antisymmetry("`≥` is antisymmetric", on(), |a: &T, b: &T| a >= b))
        .scenario(transitivity("`≥` is transitive", on(), |a: &T, b: &T| a >= b))
        .scenario(equivalence(
            "`≥` agrees with `cmp`",
            on(),
            |a: &T, b: &T| a >= b,
            |a: &T, b: &T| a.cmp(b) != Ordering::Less,
        ))
        .scenario(antireflexivity("`<` is antireflexive", on(), |a: &T, b: &T| a < b))
        .scenario(transitivity("`<` is transitive", on(), |a: &T, b: &T| a < b))
        .scenario(equivalence(
            "`<` agrees with `cmp`",
            on(),
            |a: &T, b: &T| a < b,
            |a: &T, b: &T| a.cmp(b) == Ordering::Less,
        ))
        .scenario(antireflexivity("`>` is antireflexive", on(), |a: &T, b: &T| a > b))
        .scenario(transitivity("`>` is transitive", on(), |a: &T, b: &T| a > b))
        .scenario(equivalence(
            "`>` agrees with `cmp`",
            on(),
            |a: &T, b: &T| a > b,
            |a: &T, b: &T| a.cmp(b) == Ordering::Greater,
        ))
        .scenario(Scenario::forall(
            "`min` agrees with `≤`",
            pairs(generator),
            |(a, b): &(T, T)| {
                let expected = if a <= b { a } else { b };
                a.clone().min(b.clone()) == *expected
            },
        ))
        .scenario(Scenario::forall(
            "`max` agrees with `≥`",
            pairs(generator),
            |(a, b): &(T, T)| {
                let expected = if a >= b { a } else { b };
                a.clone().max(b.clone()) == *expected
            },
        ))
}
