// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Location labels on top of accumulated violations.
//!
//! Every function here keeps the number and order of violations. A parent never
//! hides a child's violation, it only says where the child lives.

use crate::validate::Validity;
use crate::validation::Validation;

/// Validate `value` and label every resulting chain with `label`.
pub fn annotate<T: Validity + ?Sized>(value: &T, label: impl Into<String>) -> Validation {
    value.validate().decorate(label)
}

/// [`annotate`] with the operands flipped.
pub fn delve<T: Validity + ?Sized>(label: impl Into<String>, value: &T) -> Validation {
    annotate(value, label)
}

/// Label an already computed validation.
pub fn decorate(label: impl Into<String>, validation: Validation) -> Validation {
    validation.decorate(label)
}

/// Label used for element `index` by [`decorate_list`].
pub fn list_index_label(index: usize) -> String {
    format!("The element at index {} in the list", index)
}

/// Check each element independently, label it with its index, concatenate in order.
///
/// An empty slice is valid.
pub fn decorate_list<T, F>(items: &[T], check_item: F) -> Validation
where
    F: Fn(&T) -> Validation,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| check_item(item).decorate(list_index_label(index)))
        .collect()
}

/// [`decorate_list`] with the element checks spread over the rayon pool.
///
/// The result is identical to the sequential version: the indexed collect keeps
/// element order regardless of which thread finished first.
#[cfg(feature = "parallel")]
pub fn decorate_list_par<T, F>(items: &[T], check_item: F) -> Validation
where
    T: Sync,
    F: Fn(&T) -> Validation + Sync,
{
    use rayon::prelude::*;

    let per_item: Vec<Validation> = items
        .par_iter()
        .enumerate()
        .map(|(index, item)| check_item(item).decorate(list_index_label(index)))
        .collect();
    Validation::concat_all(per_item)
}
