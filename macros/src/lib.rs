// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `#[derive(Validity)]`: structural invariant checks for structs and enums.
//!
//! The derived `validate` checks every field with its own `Validity`, labels each
//! result with the field name, and labels the whole with the constructor name. For an
//! enum, only the active variant is checked. Nothing else is added: invariants that
//! span several fields go in a `check` function.
//!
//! # Example
//!
//! ```ignore
//! use validity::{check, Validation, Validity};
//!
//! #[derive(Validity)]
//! #[validity(check = "Interval::ordered")]
//! struct Interval {
//!     #[validity(with = "finite")]
//!     lower: f64,
//!     #[validity(with = "finite")]
//!     upper: f64,
//!     #[validity(skip)]
//!     cached_width: f64,
//! }
//!
//! impl Interval {
//!     fn ordered(&self) -> Validation {
//!         check(self.lower <= self.upper, "the lower bound is at most the upper bound")
//!     }
//! }
//!
//! fn finite(value: &f64) -> Validation {
//!     check(value.is_finite(), "the bound is finite")
//! }
//! ```
//!
//! Generated code refers to the runtime crate as `::validity`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod derive;

/// Derive `validity::Validity` from the type's structure.
///
/// # Attributes
///
/// - `#[validity(rename = "Label")]` on a struct or variant: constructor label
/// - `#[validity(check = "path")]` on a struct or enum: `path(&self) -> Validation`,
///   decorated with the struct label (or the enum name) and appended after the
///   structural result
/// - `#[validity(rename = "label")]` on a field: field label
/// - `#[validity(skip)]` on a field: do not check it
/// - `#[validity(with = "path")]` on a field: check it with `path(&field) -> Validation`
///
/// Every generic type parameter gets a `Validity` bound. Unions are rejected.
#[proc_macro_derive(Validity, attributes(validity))]
pub fn derive_validity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
