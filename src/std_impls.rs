// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `Validity` for standard library types.
//!
//! Fixed-width integers are exactly their declared width on every target, `char` can
//! never hold a surrogate, and `String` is always UTF-8, so all of those are trivially
//! valid. Floats are trivially valid too: NaN and the infinities are ordinary values
//! here. Use [`crate::validate_not_nan`] where a field must exclude them.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::annotate::{annotate, decorate_list, list_index_label};
use crate::validate::Validity;
use crate::validation::{invalid, trivial_validation, Validation, ViolationChain};

macro_rules! trivially_valid {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validity for $ty {
                #[inline]
                fn validate(&self) -> Validation {
                    trivial_validation(self)
                }
            }
        )*
    };
}

trivially_valid!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
    std::cmp::Ordering,
    std::time::Duration,
);

impl Validity for Validation {
    fn validate(&self) -> Validation {
        trivial_validation(self)
    }
}

impl Validity for ViolationChain {
    fn validate(&self) -> Validation {
        trivial_validation(self)
    }
}

impl<T: ?Sized> Validity for PhantomData<T> {
    fn validate(&self) -> Validation {
        Validation::empty()
    }
}

// ============================================================================
// TRANSPARENT WRAPPERS
// ============================================================================

impl<T: Validity + ?Sized> Validity for &T {
    fn validate(&self) -> Validation {
        (**self).validate()
    }
}

impl<T: Validity + ?Sized> Validity for Box<T> {
    fn validate(&self) -> Validation {
        (**self).validate()
    }
}

impl<T: Validity + ?Sized> Validity for Rc<T> {
    fn validate(&self) -> Validation {
        (**self).validate()
    }
}

impl<T: Validity + ?Sized> Validity for Arc<T> {
    fn validate(&self) -> Validation {
        (**self).validate()
    }
}

/// A cell that is mutably borrowed cannot be inspected; that is reported as a violation.
impl<T: Validity> Validity for RefCell<T> {
    fn validate(&self) -> Validation {
        match self.try_borrow() {
            Ok(value) => value.validate(),
            Err(_) => invalid("the cell is not mutably borrowed"),
        }
    }
}

// ============================================================================
// SUMS
// ============================================================================

impl<T: Validity> Validity for Option<T> {
    fn validate(&self) -> Validation {
        match self {
            None => Validation::empty(),
            Some(value) => annotate(value, "Some"),
        }
    }
}

impl<T: Validity, E: Validity> Validity for Result<T, E> {
    fn validate(&self) -> Validation {
        match self {
            Ok(value) => annotate(value, "Ok"),
            Err(error) => annotate(error, "Err"),
        }
    }
}

// ============================================================================
// SEQUENCES
// ============================================================================

impl<T: Validity> Validity for [T] {
    fn validate(&self) -> Validation {
        decorate_list(self, T::validate)
    }
}

impl<T: Validity, const N: usize> Validity for [T; N] {
    fn validate(&self) -> Validation {
        decorate_list(self.as_slice(), T::validate)
    }
}

impl<T: Validity> Validity for Vec<T> {
    fn validate(&self) -> Validation {
        decorate_list(self.as_slice(), T::validate)
    }
}

impl<T: Validity> Validity for VecDeque<T> {
    fn validate(&self) -> Validation {
        self.iter()
            .enumerate()
            .map(|(index, item)| annotate(item, list_index_label(index)))
            .collect()
    }
}

impl<T: Validity> Validity for BTreeSet<T> {
    fn validate(&self) -> Validation {
        self.iter()
            .enumerate()
            .map(|(index, item)| annotate(item, format!("The element at index {} in the set", index)))
            .collect()
    }
}

fn validate_entries<'a, K, V, I>(entries: I) -> Validation
where
    K: Validity + 'a,
    V: Validity + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    entries
        .enumerate()
        .map(|(index, (key, value))| {
            Validation::concat(
                annotate(key, format!("The key at index {} in the map", index)),
                annotate(value, format!("The value at key index {} in the map", index)),
            )
        })
        .collect()
}

impl<K: Validity, V: Validity> Validity for BTreeMap<K, V> {
    fn validate(&self) -> Validation {
        validate_entries(self.iter())
    }
}

/// Entries are visited in key order, as for `BTreeMap`, so the output does not
/// depend on the hasher.
impl<K: Validity + Ord, V: Validity, S> Validity for HashMap<K, V, S> {
    fn validate(&self) -> Validation {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        validate_entries(entries.into_iter())
    }
}

// ============================================================================
// TUPLES
// ============================================================================

macro_rules! tuple_validity {
    ($( ($($name:ident : $idx:tt => $label:literal),+) )*) => {
        $(
            impl<$($name: Validity),+> Validity for ($($name,)+) {
                fn validate(&self) -> Validation {
                    Validation::concat_all([
                        $(annotate(&self.$idx, $label)),+
                    ])
                }
            }
        )*
    };
}

tuple_validity! {
    (A: 0 => "The first element of the tuple")
    (A: 0 => "The first element of the tuple",
     B: 1 => "The second element of the tuple")
    (A: 0 => "The first element of the tuple",
     B: 1 => "The second element of the tuple",
     C: 2 => "The third element of the tuple")
    (A: 0 => "The first element of the tuple",
     B: 1 => "The second element of the tuple",
     C: 2 => "The third element of the tuple",
     D: 3 => "The fourth element of the tuple")
    (A: 0 => "The first element of the tuple",
     B: 1 => "The second element of the tuple",
     C: 2 => "The third element of the tuple",
     D: 3 => "The fourth element of the tuple",
     E: 4 => "The fifth element of the tuple")
    (A: 0 => "The first element of the tuple",
     B: 1 => "The second element of the tuple",
     C: 2 => "The third element of the tuple",
     D: 3 => "The fourth element of the tuple",
     E: 4 => "The fifth element of the tuple",
     F: 5 => "The sixth element of the tuple")
}
