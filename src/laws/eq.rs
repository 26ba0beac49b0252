// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equality laws: `==` is an equivalence relation and `!=` is its negation.

use std::fmt::Debug;

use proptest::arbitrary::Arbitrary;

use super::generator::{interface_generators, share, shared, GenValid, Generator, SharedGenerator};
use super::relations::{equivalence, reflexivity, symmetry, transitivity};
use super::scenario::Suite;

/// The equality laws over the valid, unchecked and arbitrary tiers of `T`.
pub fn eq_laws<T>(type_name: &str) -> Suite
where
    T: GenValid + Arbitrary + Eq,
    T::Strategy: 'static,
{
    interface_generators::<T>().into_iter().fold(
        Suite::new(format!("Eq {}", type_name)),
        |suite, (tier, generator)| suite.group(equality_group(tier.label(), &generator)),
    )
}

/// The equality laws over a single generator.
pub fn eq_laws_on<T, G>(name: impl Into<String>, generator: G) -> Suite
where
    T: Debug + PartialEq + 'static,
    G: Generator<T> + 'static,
{
    equality_group(name, &share(generator))
}

fn equality_group<T>(name: impl Into<String>, generator: &SharedGenerator<T>) -> Suite
where
    T: Debug + PartialEq + 'static,
{
    Suite::new(name)
        .scenario(reflexivity(
            "`==` is reflexive",
            shared(generator),
            |a: &T, b: &T| a == b,
        ))
        .scenario(symmetry(
            "`==` is symmetric",
            shared(generator),
            |a: &T, b: &T| a == b,
        ))
        .scenario(transitivity(
            "`==` is transitive",
            shared(generator),
            |a: &T, b: &T| a == b,
        ))
        .scenario(equivalence(
            "`!=` is the negation of `==`",
            shared(generator),
            |a: &T, b: &T| a != b,
            |a: &T, b: &T| !(a == b),
        ))
}
