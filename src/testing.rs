//! Fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The fixtures
//! implement `Validity` by hand, composed from the same `annotate`/`decorate`/`check`
//! building blocks the derive expands to, so they work with the `derive` feature off.

#![doc(hidden)]

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use proptest::arbitrary::Arbitrary;
use proptest::prelude::*;
use thiserror::Error;

use crate::laws::{GenInvalid, GenUnchecked, GenValid};
use crate::{check, decorate, Validation, Validity};

// ============================================================================
// PERCENT
// ============================================================================

/// A percentage. Valid when at most 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(pub u8);

impl Validity for Percent {
    fn validate(&self) -> Validation {
        check(self.0 <= 100, "the percentage is at most 100")
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePercentError {
    #[error("a percentage ends with `%`")]
    MissingSign,
    #[error("invalid percentage: {0}")]
    Number(#[from] ParseIntError),
}

impl FromStr for Percent {
    type Err = ParsePercentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_suffix('%').ok_or(ParsePercentError::MissingSign)?;
        Ok(Percent(digits.parse()?))
    }
}

impl Arbitrary for Percent {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: ()) -> Self::Strategy {
        any::<u8>().prop_map(Percent).boxed()
    }
}

impl GenUnchecked for Percent {
    fn gen_unchecked() -> BoxedStrategy<Self> {
        prop_oneof![0u8..=100, any::<u8>()].prop_map(Percent).boxed()
    }
}

impl GenValid for Percent {
    fn gen_valid() -> BoxedStrategy<Self> {
        (0u8..=100).prop_map(Percent).boxed()
    }
}

impl GenInvalid for Percent {
    fn gen_invalid() -> BoxedStrategy<Self> {
        (101u8..=255).prop_map(Percent).boxed()
    }
}

// ============================================================================
// INTERVAL
// ============================================================================

/// A closed interval. Valid when both bounds are finite and ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

pub fn finite_bound(value: &f64) -> Validation {
    check(value.is_finite(), "the bound is finite")
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Interval { lower, upper }
    }

    pub fn ordered(&self) -> Validation {
        check(
            self.lower <= self.upper,
            "the lower bound is at most the upper bound",
        )
    }
}

impl Validity for Interval {
    fn validate(&self) -> Validation {
        let fields = Validation::concat(
            decorate("lower", finite_bound(&self.lower)),
            decorate("upper", finite_bound(&self.upper)),
        );
        Validation::concat(
            decorate("Interval", fields),
            decorate("Interval", self.ordered()),
        )
    }
}

fn bound() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e6f64..1.0e6,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

impl GenUnchecked for Interval {
    fn gen_unchecked() -> BoxedStrategy<Self> {
        (bound(), bound())
            .prop_map(|(lower, upper)| Interval::new(lower, upper))
            .boxed()
    }
}

impl GenValid for Interval {
    fn gen_valid() -> BoxedStrategy<Self> {
        (-1.0e6f64..1.0e6, 0.0f64..1.0e6)
            .prop_map(|(lower, width)| Interval::new(lower, lower + width))
            .boxed()
    }
}

impl GenInvalid for Interval {}
