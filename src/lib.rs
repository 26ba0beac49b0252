// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Declared invariants for data types, and property-based laws for their interfaces.
//!
//! Types state the invariants their type does not enforce by implementing [`Validity`]
//! (usually via `#[derive(Validity)]`). Checking a value gives a [`Validation`]: an
//! ordered list of violation chains, empty when the value is valid. Each chain names
//! the path from the checked value down to the broken invariant.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ validation.rs │────▶│ annotate.rs  │────▶│  render.rs   │
//! │ (Validation,  │     │ (annotate,   │     │ (render,     │
//! │  check, ...)  │     │  decorate)   │     │  construct)  │
//! └───────────────┘     └──────────────┘     └──────────────┘
//!         ▲                    ▲
//!         │                    │
//! ┌───────────────┐     ┌──────────────┐
//! │  validate.rs  │◀────│ std_impls.rs │   #[derive(Validity)] (validity-derive)
//! │  (Validity)   │     │              │
//! └───────────────┘     └──────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          laws/                              │
//! │  relations ─▶ scenario ─▶ ord, eq, round_trip, monoid, ... │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use validity::{check, render, Validation, Validity};
//!
//! #[derive(Debug, Validity)]
//! struct Percent(#[validity(with = "in_range")] u8);
//!
//! fn in_range(value: &u8) -> Validation {
//!     check(*value <= 100, "the value is at most 100")
//! }
//!
//! assert!(Percent(42).is_valid());
//! assert_eq!(
//!     render(&Percent(200).validate()).unwrap(),
//!     "Percent\n \\ 0\n  \\ Violated: the value is at most 100"
//! );
//! ```

pub mod annotate;
pub mod error;
pub mod laws;
pub mod render;
mod std_impls;
pub mod validate;
pub mod validation;

#[doc(hidden)]
pub mod testing;

pub use annotate::{annotate, decorate, decorate_list, delve, list_index_label};
#[cfg(feature = "parallel")]
pub use annotate::decorate_list_par;
pub use error::{ConfigError, LawFailure};
pub use render::{construct_valid, construct_valid_unsafe, pretty_validate, render};
pub use validate::{is_invalid, is_valid, validate_not_infinite, validate_not_nan, Validity};
pub use validation::{
    check, declare, invalid, trivial_validation, valid, Validation, ViolationChain,
};

#[cfg(feature = "derive")]
pub use validity_derive::Validity;
