// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Properties of functions, and the validity suite for generator tiers.

use std::fmt::Debug;

use super::generator::{GenInvalid, GenValid, Generator};
use super::scenario::{Scenario, Suite};
use crate::render::render;
use crate::validate::Validity;

/// `f` maps every generated input to a valid output.
pub fn produces_valid<A, B, G, F>(name: impl Into<String>, generator: G, f: F) -> Scenario
where
    A: Debug + 'static,
    B: Validity,
    G: Generator<A> + 'static,
    F: Fn(&A) -> B + Send + Sync + 'static,
{
    Scenario::forall(name, generator, move |input: &A| {
        match render(&f(input).validate()) {
            None => Ok(()),
            Some(report) => Err(format!("the output is invalid:\n{}", report)),
        }
    })
}

/// `f(f(x)) == f(x)`.
pub fn idempotent<T, G, F>(name: impl Into<String>, generator: G, f: F) -> Scenario
where
    T: Debug + PartialEq + 'static,
    G: Generator<T> + 'static,
    F: Fn(&T) -> T + Send + Sync + 'static,
{
    Scenario::forall(name, generator, move |x: &T| {
        let once = f(x);
        let twice = f(&once);
        if once == twice {
            Ok(())
        } else {
            Err(format!("f(x) = {:?} but f(f(x)) = {:?}", once, twice))
        }
    })
}

/// `g(f(x)) == x`.
pub fn inverse_of<A, B, G, F, H>(name: impl Into<String>, generator: G, f: F, g: H) -> Scenario
where
    A: Debug + PartialEq + 'static,
    B: Debug,
    G: Generator<A> + 'static,
    F: Fn(&A) -> B + Send + Sync + 'static,
    H: Fn(&B) -> A + Send + Sync + 'static,
{
    Scenario::forall(name, generator, move |x: &A| {
        let there = f(x);
        let back = g(&there);
        if back == *x {
            Ok(())
        } else {
            Err(format!("f(x) = {:?} but g(f(x)) = {:?}", there, back))
        }
    })
}

/// `f(x) == g(x)`.
pub fn equivalent_functions<A, B, G, F, H>(
    name: impl Into<String>,
    generator: G,
    f: F,
    g: H,
) -> Scenario
where
    A: Debug + 'static,
    B: Debug + PartialEq,
    G: Generator<A> + 'static,
    F: Fn(&A) -> B + Send + Sync + 'static,
    H: Fn(&A) -> B + Send + Sync + 'static,
{
    Scenario::forall(name, generator, move |x: &A| {
        let left = f(x);
        let right = g(x);
        if left == right {
            Ok(())
        } else {
            Err(format!("f(x) = {:?} but g(x) = {:?}", left, right))
        }
    })
}

/// The valid and invalid tiers of `T` produce what they promise.
pub fn validity_laws<T>(type_name: &str) -> Suite
where
    T: GenValid + GenInvalid,
{
    Suite::new(format!("Validity {}", type_name))
        .scenario(Scenario::forall(
            "gen_valid only generates valid values",
            T::gen_valid,
            |value: &T| match render(&value.validate()) {
                None => Ok(()),
                Some(report) => Err(format!("the value is invalid:\n{}", report)),
            },
        ))
        .scenario(Scenario::forall(
            "gen_invalid only generates invalid values",
            T::gen_invalid,
            |value: &T| {
                if value.is_valid() {
                    Err("the value satisfies every invariant".to_string())
                } else {
                    Ok(())
                }
            },
        ))
}
