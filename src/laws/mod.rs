// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Property-based laws.
//!
//! Relations are plain `Fn(&T, &T) -> bool` values. A law lifts a relation property
//! over a [`Generator`] into a named [`Scenario`]; suites group scenarios and run them
//! independently. Counterexamples are shrunk by proptest before they are reported.
//!
//! # Modules
//!
//! | Module        | Provides                                                   |
//! |---------------|------------------------------------------------------------|
//! | `relations`   | relation predicates and their law builders                 |
//! | `properties`  | function properties, `validity_laws`                       |
//! | `ord`, `eq`   | total order and equality suites                            |
//! | `round_trip`  | `Display`/`FromStr` and custom render/parse round trips    |
//! | `monoid`      | identity and associativity of an `empty`/`combine` pair    |
//! | `composition` | wrapping and sequencing laws over [`Sequenced`]            |
//!
//! # Example
//!
//! ```
//! use validity::laws::{ord_laws_on, LawConfig};
//! use proptest::prelude::*;
//!
//! let report = ord_laws_on("u16", || any::<u16>())
//!     .run(&LawConfig::default().with_cases(32));
//! assert!(report.is_success());
//! ```

mod composition;
mod config;
mod eq;
mod generator;
mod monoid;
mod ord;
mod properties;
mod relations;
mod round_trip;
mod scenario;

pub use composition::{CompositionLaws, Kleisli, Sequenced};
pub use self::config::LawConfig;
pub use eq::{eq_laws, eq_laws_on};
pub use generator::{
    interface_generators, pairs, share, shared, triples, GenInvalid, GenUnchecked, GenValid,
    Generator, SharedGenerator, Tier,
};
pub use monoid::monoid_laws;
pub use ord::{ord_laws, ord_laws_on};
pub use properties::{equivalent_functions, idempotent, inverse_of, produces_valid, validity_laws};
pub use relations::{
    antireflexive, antireflexivity, antisymmetric, antisymmetry, equivalence, equivalent_to,
    reflexive, reflexivity, symmetric, symmetry, transitive, transitivity,
};
pub use round_trip::{round_trip_laws, round_trip_laws_on, round_trip_laws_with};
pub use scenario::{forall, Outcome, Scenario, Suite, SuiteReport, Verdict};
