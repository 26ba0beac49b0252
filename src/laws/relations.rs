// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relation properties as plain predicates, and the laws that quantify them.
//!
//! The predicates take one to three samples and say whether the property holds for
//! those samples. The law builders lift them over a generator.
//!
//! | Predicate       | Holds when                                    |
//! |-----------------|-----------------------------------------------|
//! | `reflexive`     | `r(x, x)`                                     |
//! | `antireflexive` | `!r(x, x)`                                    |
//! | `symmetric`     | `r(a, b) → r(b, a)`                           |
//! | `antisymmetric` | `r(a, b) ∧ r(b, a) → a == b`                  |
//! | `transitive`    | `r(a, b) ∧ r(b, c) → r(a, c)`                 |
//! | `equivalent_to` | `r(a, b) == s(a, b)`                          |

use std::fmt::Debug;

use super::generator::{pairs, share, triples, Generator};
use super::scenario::Scenario;

pub fn reflexive<T, R>(relation: R, x: &T) -> bool
where
    R: Fn(&T, &T) -> bool,
{
    relation(x, x)
}

pub fn antireflexive<T, R>(relation: R, x: &T) -> bool
where
    R: Fn(&T, &T) -> bool,
{
    !relation(x, x)
}

pub fn symmetric<T, R>(relation: R, a: &T, b: &T) -> bool
where
    R: Fn(&T, &T) -> bool,
{
    !relation(a, b) || relation(b, a)
}

pub fn antisymmetric<T, R>(relation: R, a: &T, b: &T) -> bool
where
    T: PartialEq,
    R: Fn(&T, &T) -> bool,
{
    !(relation(a, b) && relation(b, a)) || a == b
}

pub fn transitive<T, R>(relation: R, a: &T, b: &T, c: &T) -> bool
where
    R: Fn(&T, &T) -> bool,
{
    !(relation(a, b) && relation(b, c)) || relation(a, c)
}

/// Both relations give the same answer on `(a, b)`.
pub fn equivalent_to<T, R, S>(left: R, right: S, a: &T, b: &T) -> bool
where
    R: Fn(&T, &T) -> bool,
    S: Fn(&T, &T) -> bool,
{
    left(a, b) == right(a, b)
}

// ============================================================================
// LAWS
// ============================================================================

/// `relation` is reflexive on every generated value.
pub fn reflexivity<T, G, R>(name: impl Into<String>, generator: G, relation: R) -> Scenario
where
    T: Debug + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Scenario::forall(name, generator, move |x: &T| reflexive(&relation, x))
}

pub fn antireflexivity<T, G, R>(name: impl Into<String>, generator: G, relation: R) -> Scenario
where
    T: Debug + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Scenario::forall(name, generator, move |x: &T| antireflexive(&relation, x))
}

pub fn symmetry<T, G, R>(name: impl Into<String>, generator: G, relation: R) -> Scenario
where
    T: Debug + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let samples = pairs(&share(generator));
    Scenario::forall(name, samples, move |(a, b): &(T, T)| {
        symmetric(&relation, a, b)
    })
}

pub fn antisymmetry<T, G, R>(name: impl Into<String>, generator: G, relation: R) -> Scenario
where
    T: Debug + PartialEq + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let samples = pairs(&share(generator));
    Scenario::forall(name, samples, move |(a, b): &(T, T)| {
        antisymmetric(&relation, a, b)
    })
}

pub fn transitivity<T, G, R>(name: impl Into<String>, generator: G, relation: R) -> Scenario
where
    T: Debug + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let samples = triples(&share(generator));
    Scenario::forall(name, samples, move |(a, b, c): &(T, T, T)| {
        transitive(&relation, a, b, c)
    })
}

/// `left` and `right` agree on every generated pair.
pub fn equivalence<T, G, R, S>(
    name: impl Into<String>,
    generator: G,
    left: R,
    right: S,
) -> Scenario
where
    T: Debug + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T, &T) -> bool + Send + Sync + 'static,
    S: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let samples = pairs(&share(generator));
    Scenario::forall(name, samples, move |(a, b): &(T, T)| {
        equivalent_to(&left, &right, a, b)
    })
}
