// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Identity and associativity for an explicit `empty`/`combine` pair.

use std::fmt::Debug;
use std::sync::Arc;

use super::generator::{share, shared, triples, Generator};
use super::scenario::{agree, Scenario, Suite};

pub fn monoid_laws<T, G, E, C>(name: impl Into<String>, generator: G, empty: E, combine: C) -> Suite
where
    T: Debug + PartialEq + 'static,
    G: Generator<T> + 'static,
    E: Fn() -> T + Send + Sync + 'static,
    C: Fn(&T, &T) -> T + Send + Sync + 'static,
{
    let generator = share(generator);
    let empty = Arc::new(empty);
    let combine = Arc::new(combine);

    let left_identity = {
        let (empty, combine) = (Arc::clone(&empty), Arc::clone(&combine));
        Scenario::forall(
            "`empty` is a left identity of `combine`",
            shared(&generator),
            move |x: &T| agree(&combine(&empty(), x), x),
        )
    };
    let right_identity = {
        let combine = Arc::clone(&combine);
        Scenario::forall(
            "`empty` is a right identity of `combine`",
            shared(&generator),
            move |x: &T| agree(&combine(x, &empty()), x),
        )
    };
    let associativity = Scenario::forall(
        "`combine` is associative",
        triples(&generator),
        move |(a, b, c): &(T, T, T)| {
            agree(&combine(&combine(a, b), c), &combine(a, &combine(b, c)))
        },
    );

    Suite::new(name)
        .scenario(left_identity)
        .scenario(right_identity)
        .scenario(associativity)
}
