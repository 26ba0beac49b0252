// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composition laws for wrapping and sequencing types.
//!
//! A [`Sequenced`] type can wrap a plain item and sequence a function that returns
//! another wrapped value. For `Option`, `Result` and `Vec` these are `Some`/`Ok`/`vec![x]`
//! and `and_then`/`flat_map`.
//!
//! | Law            | Equation                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | left identity  | `wrap(a).and_then(f) == f(a)`                                   |
//! | right identity | `m.and_then(wrap) == m`                                         |
//! | associativity  | `m.and_then(f).and_then(g) == m.and_then(\|x\| f(x).and_then(g))` |
//! | absorbing      | `zero.and_then(f) == zero`                                      |
//!
//! The laws are checked against hand-written generators: one for plain items, one for
//! wrapped values, one for functions. Functions are [`Kleisli`] values so that a
//! counterexample can name the function it used.

use std::fmt::{self, Debug};
use std::sync::Arc;

use super::generator::{share, Generator, SharedGenerator};
use super::scenario::{agree, Scenario, Suite};

/// A type that can wrap an item and sequence computations over its items.
pub trait Sequenced: Sized {
    type Item;

    fn wrap(item: Self::Item) -> Self;

    fn and_then_with<F>(self, f: F) -> Self
    where
        F: FnMut(Self::Item) -> Self;
}

impl<A> Sequenced for Option<A> {
    type Item = A;

    fn wrap(item: A) -> Self {
        Some(item)
    }

    fn and_then_with<F>(self, f: F) -> Self
    where
        F: FnMut(A) -> Self,
    {
        self.and_then(f)
    }
}

impl<A, E> Sequenced for Result<A, E> {
    type Item = A;

    fn wrap(item: A) -> Self {
        Ok(item)
    }

    fn and_then_with<F>(self, f: F) -> Self
    where
        F: FnMut(A) -> Self,
    {
        self.and_then(f)
    }
}

impl<A> Sequenced for Vec<A> {
    type Item = A;

    fn wrap(item: A) -> Self {
        vec![item]
    }

    fn and_then_with<F>(self, f: F) -> Self
    where
        F: FnMut(A) -> Self,
    {
        self.into_iter().flat_map(f).collect()
    }
}

/// A labelled function from a plain item to a wrapped value.
pub struct Kleisli<A, M> {
    label: String,
    run: Arc<dyn Fn(A) -> M + Send + Sync>,
}

impl<A, M> Kleisli<A, M> {
    pub fn new<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(A) -> M + Send + Sync + 'static,
    {
        Kleisli {
            label: label.into(),
            run: Arc::new(f),
        }
    }

    pub fn apply(&self, item: A) -> M {
        (self.run)(item)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<A, M> Clone for Kleisli<A, M> {
    fn clone(&self) -> Self {
        Kleisli {
            label: self.label.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<A, M> Debug for Kleisli<A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

// ============================================================================
// SUITE
// ============================================================================

/// Builder for the composition suite of one wrapping type `M`.
pub struct CompositionLaws<M: Sequenced> {
    name: String,
    items: SharedGenerator<M::Item>,
    wrapped: SharedGenerator<M>,
    functions: SharedGenerator<Kleisli<M::Item, M>>,
    absorbing: Option<M>,
}

impl<M> CompositionLaws<M>
where
    M: Sequenced + Debug + PartialEq + Clone + Send + Sync + 'static,
    M::Item: Debug + Clone + 'static,
{
    pub fn new<GI, GW, GF>(name: impl Into<String>, items: GI, wrapped: GW, functions: GF) -> Self
    where
        GI: Generator<M::Item> + 'static,
        GW: Generator<M> + 'static,
        GF: Generator<Kleisli<M::Item, M>> + 'static,
    {
        CompositionLaws {
            name: name.into(),
            items: share(items),
            wrapped: share(wrapped),
            functions: share(functions),
            absorbing: None,
        }
    }

    /// Also check that `zero` absorbs every generated function.
    pub fn absorbing(mut self, zero: M) -> Self {
        self.absorbing = Some(zero);
        self
    }

    pub fn build(self) -> Suite {
        let left_identity = {
            let (items, functions) = (Arc::clone(&self.items), Arc::clone(&self.functions));
            Scenario::forall(
                "left identity: `wrap(a).and_then(f) == f(a)`",
                move || (items.strategy(), functions.strategy()),
                |(a, f): &(M::Item, Kleisli<M::Item, M>)| {
                    agree(&M::wrap(a.clone()).and_then_with(|x| f.apply(x)), &f.apply(a.clone()))
                },
            )
        };

        let right_identity = {
            let wrapped = Arc::clone(&self.wrapped);
            Scenario::forall(
                "right identity: `m.and_then(wrap) == m`",
                move || wrapped.strategy(),
                |m: &M| agree(&m.clone().and_then_with(M::wrap), m),
            )
        };

        let associativity = {
            let (wrapped, functions) = (Arc::clone(&self.wrapped), Arc::clone(&self.functions));
            Scenario::forall(
                "associativity: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`",
                move || (wrapped.strategy(), functions.strategy(), functions.strategy()),
                |(m, f, g): &(M, Kleisli<M::Item, M>, Kleisli<M::Item, M>)| {
                    let sequenced = m
                        .clone()
                        .and_then_with(|x| f.apply(x))
                        .and_then_with(|y| g.apply(y));
                    let nested = m
                        .clone()
                        .and_then_with(|x| f.apply(x).and_then_with(|y| g.apply(y)));
                    agree(&sequenced, &nested)
                },
            )
        };

        let mut suite = Suite::new(self.name)
            .scenario(left_identity)
            .scenario(right_identity)
            .scenario(associativity);

        if let Some(zero) = self.absorbing {
            let functions = Arc::clone(&self.functions);
            suite = suite.scenario(Scenario::forall(
                "absorbing: `zero.and_then(f) == zero`",
                move || functions.strategy(),
                move |f: &Kleisli<M::Item, M>| {
                    agree(&zero.clone().and_then_with(|x| f.apply(x)), &zero)
                },
            ));
        }
        suite
    }
}

impl<M> Debug for CompositionLaws<M>
where
    M: Sequenced + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionLaws")
            .field("name", &self.name)
            .field("absorbing", &self.absorbing)
            .finish_non_exhaustive()
    }
}
