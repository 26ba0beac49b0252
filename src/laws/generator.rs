// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The generator capability and the generator tiers.
//!
//! Generators are proptest strategies. A strategy's value tree carries its own
//! shrinking, so "a generator paired with a shrink function" is a single value here.
//! Concrete generators live with the types they generate; this module only names the
//! tiers and builds samples of several values out of one generator.
//!
//! | Tier        | Source                        | Stresses                         |
//! |-------------|-------------------------------|----------------------------------|
//! | `Valid`     | [`GenValid::gen_valid`]       | behaviour on well-formed values  |
//! | `Invalid`   | [`GenInvalid::gen_invalid`]   | that invariants actually reject  |
//! | `Unchecked` | [`GenUnchecked::gen_unchecked`]| raw values, invariants or not   |
//! | `Arbitrary` | proptest `Arbitrary`          | the type's own default strategy  |

use std::fmt::{self, Debug};
use std::sync::Arc;

use proptest::arbitrary::{any, Arbitrary};
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::validate::Validity;

/// Something that can hand out a fresh strategy for `T` on every law run.
///
/// Any `Fn() -> impl Strategy<Value = T>` closure is a generator.
pub trait Generator<T>: Send + Sync {
    fn strategy(&self) -> BoxedStrategy<T>;
}

impl<T, S, F> Generator<T> for F
where
    F: Fn() -> S + Send + Sync,
    S: Strategy<Value = T> + 'static,
{
    fn strategy(&self) -> BoxedStrategy<T> {
        self().boxed()
    }
}

/// A generator shared between the scenarios of a suite.
pub type SharedGenerator<T> = Arc<dyn Generator<T>>;

pub fn share<T, G>(generator: G) -> SharedGenerator<T>
where
    G: Generator<T> + 'static,
{
    Arc::new(generator)
}

/// A generator that draws from an already shared one.
pub fn shared<T>(generator: &SharedGenerator<T>) -> impl Generator<T>
where
    T: Debug + 'static,
{
    let generator = Arc::clone(generator);
    move || generator.strategy()
}

/// Two independent samples from one generator.
pub fn pairs<T>(generator: &SharedGenerator<T>) -> impl Generator<(T, T)>
where
    T: Debug + 'static,
{
    let generator = Arc::clone(generator);
    move || (generator.strategy(), generator.strategy())
}

/// Three independent samples from one generator.
pub fn triples<T>(generator: &SharedGenerator<T>) -> impl Generator<(T, T, T)>
where
    T: Debug + 'static,
{
    let generator = Arc::clone(generator);
    move || {
        (
            generator.strategy(),
            generator.strategy(),
            generator.strategy(),
        )
    }
}

// ============================================================================
// TIERS
// ============================================================================

/// Raw values with no promise about invariants.
pub trait GenUnchecked: Debug + Sized + 'static {
    fn gen_unchecked() -> BoxedStrategy<Self>;
}

/// Values expected to satisfy every invariant.
///
/// The default filters [`GenUnchecked::gen_unchecked`]. Override it when valid values
/// are rare among raw ones, or the law runner gives up on rejects.
pub trait GenValid: GenUnchecked + Validity {
    fn gen_valid() -> BoxedStrategy<Self> {
        Self::gen_unchecked()
            .prop_filter("generated values satisfy their invariants", |value| {
                value.is_valid()
            })
            .boxed()
    }
}

/// Values expected to violate at least one invariant.
pub trait GenInvalid: GenUnchecked + Validity {
    fn gen_invalid() -> BoxedStrategy<Self> {
        Self::gen_unchecked()
            .prop_filter("generated values violate an invariant", |value| {
                !value.is_valid()
            })
            .boxed()
    }
}

/// The sampling distribution a scenario draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Valid,
    Invalid,
    Unchecked,
    Arbitrary,
}

impl Tier {
    /// The tiers interface-law suites are instantiated over.
    pub const INTERFACE: [Tier; 3] = [Tier::Valid, Tier::Unchecked, Tier::Arbitrary];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Valid => "valid values",
            Tier::Invalid => "invalid values",
            Tier::Unchecked => "unchecked values",
            Tier::Arbitrary => "arbitrary values",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generator per [`Tier::INTERFACE`] tier, in that order.
pub fn interface_generators<T>() -> [(Tier, SharedGenerator<T>); 3]
where
    T: GenValid + Arbitrary,
    T::Strategy: 'static,
{
    [
        (Tier::Valid, share(T::gen_valid)),
        (Tier::Unchecked, share(T::gen_unchecked)),
        (Tier::Arbitrary, share(any::<T>)),
    ]
}
