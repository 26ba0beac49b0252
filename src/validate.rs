// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The invariant-check capability.
//!
//! A type is [`Validity`] when it can say which of its invariants a value breaks.
//! Most implementations are derived structurally (`#[derive(Validity)]`), which only
//! composes the invariants of the parts. Cross-field invariants are written by hand,
//! usually as a `check` attribute on top of the derived traversal.

use crate::validation::Validation;

/// Types that carry invariants beyond what their structure enforces.
pub trait Validity {
    /// Every violated invariant of `self`, in traversal order.
    fn validate(&self) -> Validation;

    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

/// `true` when `value` satisfies all of its declared invariants.
pub fn is_valid<T: Validity + ?Sized>(value: &T) -> bool {
    value.validate().is_valid()
}

/// `true` when `value` violates at least one declared invariant.
pub fn is_invalid<T: Validity + ?Sized>(value: &T) -> bool {
    !is_valid(value)
}

/// Reject NaN.
pub fn validate_not_nan(value: f64) -> Validation {
    crate::check(!value.is_nan(), "the value is not NaN")
}

/// Reject positive and negative infinity.
pub fn validate_not_infinite(value: f64) -> Validation {
    crate::check(!value.is_infinite(), "the value is not infinite")
}
