// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable diagnostics and checked construction.
//!
//! The text format is stable and meant for golden-file comparison:
//!
//! ```text
//! Interval
//!  \ lower
//!   \ Violated: the bound is finite
//! Interval
//!  \ Violated: the lower bound is at most the upper bound
//! ```
//!
//! One block per violation chain, blocks separated by a single newline. Within a
//! block, the line at depth `i > 0` is indented by `i` spaces followed by `\ `.

use std::fmt::Debug;

use crate::validate::Validity;
use crate::validation::Validation;

/// Render the cascade, or `None` when there is nothing to report.
pub fn render(validation: &Validation) -> Option<String> {
    if validation.is_valid() {
        return None;
    }
    let blocks: Vec<String> = validation
        .violations()
        .iter()
        .map(ToString::to_string)
        .collect();
    Some(blocks.join("\n"))
}

/// The value if it is valid, otherwise the rendered cascade.
pub fn pretty_validate<T: Validity>(value: T) -> Result<T, String> {
    match render(&value.validate()) {
        None => Ok(value),
        Some(report) => Err(report),
    }
}

/// The value if it is valid.
pub fn construct_valid<T: Validity>(value: T) -> Option<T> {
    value.is_valid().then_some(value)
}

/// The value, which the caller has already proven valid.
///
/// # Panics
///
/// Panics with the value's `Debug` form and the rendered cascade when the value is
/// invalid. This is a programming-error guard, not a way to handle bad input; use
/// [`construct_valid`] or [`pretty_validate`] for that.
pub fn construct_valid_unsafe<T: Validity + Debug>(value: T) -> T {
    if let Some(report) = render(&value.validate()) {
        panic!("{:?} is not valid:\n{}", value, report);
    }
    value
}
