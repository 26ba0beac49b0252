// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Textual round-trip laws: parsing a rendered value gives the value back.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use proptest::arbitrary::Arbitrary;

use super::generator::{interface_generators, share, shared, GenValid, Generator, SharedGenerator};
use super::scenario::{Scenario, Suite};

const LAW: &str = "parsing the rendered value gives the value back";

/// `T::from_str(&x.to_string()) == Ok(x)` over the valid, unchecked and arbitrary
/// tiers of `T`.
pub fn round_trip_laws<T>(type_name: &str) -> Suite
where
    T: GenValid + Arbitrary + Display + FromStr + PartialEq,
    <T as FromStr>::Err: Debug,
    <T as Arbitrary>::Strategy: 'static,
{
    interface_generators::<T>().into_iter().fold(
        Suite::new(format!("Round trip {}", type_name)),
        |suite, (tier, generator)| suite.group(display_group(tier.label(), &generator)),
    )
}

/// The `Display`/`FromStr` round trip over a single generator.
pub fn round_trip_laws_on<T, G>(name: impl Into<String>, generator: G) -> Suite
where
    T: Debug + Display + FromStr + PartialEq + 'static,
    <T as FromStr>::Err: Debug,
    G: Generator<T> + 'static,
{
    display_group(name, &share(generator))
}

/// The round trip through an explicit `render`/`parse` pair.
pub fn round_trip_laws_with<T, G, R, P, E>(
    name: impl Into<String>,
    generator: G,
    render: R,
    parse: P,
) -> Suite
where
    T: Debug + PartialEq + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T) -> String + Send + Sync + 'static,
    P: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    E: Debug,
{
    Suite::new(name).scenario(round_trip(LAW, generator, render, parse))
}

fn display_group<T>(name: impl Into<String>, generator: &SharedGenerator<T>) -> Suite
where
    T: Debug + Display + FromStr + PartialEq + 'static,
    <T as FromStr>::Err: Debug,
{
    Suite::new(name).scenario(round_trip(
        LAW,
        shared(generator),
        |x: &T| x.to_string(),
        |text: &str| text.parse::<T>(),
    ))
}

fn round_trip<T, G, R, P, E>(name: &str, generator: G, render: R, parse: P) -> Scenario
where
    T: Debug + PartialEq + 'static,
    G: Generator<T> + 'static,
    R: Fn(&T) -> String + Send + Sync + 'static,
    P: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    E: Debug,
{
    Scenario::forall(name, generator, move |x: &T| {
        let text = render(x);
        match parse(&text) {
            Ok(back) if back == *x => Ok(()),
            Ok(back) => Err(format!(
                "{:?} renders as {:?}, which parses back as {:?}",
                x, text, back
            )),
            Err(error) => Err(format!(
                "{:?} renders as {:?}, which does not parse: {:?}",
                x, text, error
            )),
        }
    })
}
