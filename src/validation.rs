// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The violation accumulator and the primitive invariant constructors.
//!
//! A [`Validation`] is an ordered list of [`ViolationChain`]s. Each chain is one path
//! from the root of a value down to exactly one violated invariant. The empty list
//! means the value is valid, and there is no such thing as "partially valid".
//!
//! # Algebra
//!
//! | Law           | Statement                                             |
//! |---------------|-------------------------------------------------------|
//! | left identity | `concat(empty(), a) == a`                             |
//! | right identity| `concat(a, empty()) == a`                             |
//! | associativity | `concat(concat(a, b), c) == concat(a, concat(b, c))`  |
//!
//! Combination is plain ordered concatenation. The operations are named functions
//! rather than operator overloads so the laws stay visible at call sites and in tests.
//!
//! # Example
//!
//! ```
//! use validity::{check, declare, Validation};
//!
//! let lo = 3;
//! let hi = 7;
//! let v = Validation::concat(
//!     check(lo <= hi, "the lower bound is at most the upper bound"),
//!     declare("the upper bound is below 100", hi < 100),
//! );
//! assert!(v.is_valid());
//! ```

use std::fmt;

/// One path from the root of a value to a single violated invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViolationChain {
    /// The invariant that does not hold, stated positively.
    Violated(String),
    /// A location label (field, constructor, index) wrapping a deeper chain.
    Location(String, Box<ViolationChain>),
}

impl ViolationChain {
    /// Wrap this chain in one more location label.
    pub fn located(self, label: impl Into<String>) -> Self {
        ViolationChain::Location(label.into(), Box::new(self))
    }

    /// The violated invariant at the bottom of the chain.
    pub fn reason(&self) -> &str {
        let mut chain = self;
        loop {
            match chain {
                ViolationChain::Violated(reason) => return reason,
                ViolationChain::Location(_, child) => chain = child,
            }
        }
    }

    /// Location labels from outermost to innermost.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut chain = self;
        while let ViolationChain::Location(label, child) = chain {
            labels.push(label.as_str());
            chain = child;
        }
        labels
    }

    /// Number of location labels above the violation.
    pub fn depth(&self) -> usize {
        self.labels().len()
    }

    /// The chain as one text segment per level, top-down.
    pub(crate) fn segments(&self) -> Vec<String> {
        let mut segments: Vec<String> = self.labels().into_iter().map(str::to_owned).collect();
        segments.push(format!("Violated: {}", self.reason()));
        segments
    }
}

impl fmt::Display for ViolationChain {
    /// Cascade format: line `i > 0` is indented by `i` spaces and prefixed with `\ `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, segment) in self.segments().iter().enumerate() {
            match depth {
                0 => f.write_str(segment)?,
                _ => write!(f, "\n{}\\ {}", " ".repeat(depth), segment)?,
            }
        }
        Ok(())
    }
}

/// Ordered accumulation of violated invariants. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Validation {
    violations: Vec<ViolationChain>,
}

impl Validation {
    /// The identity: no violations.
    pub fn empty() -> Self {
        Validation {
            violations: Vec::new(),
        }
    }

    /// Ordered concatenation: all of `a`'s violations, then all of `b`'s.
    pub fn concat(a: Validation, b: Validation) -> Self {
        let mut violations = a.violations;
        violations.extend(b.violations);
        Validation { violations }
    }

    /// Fold [`Validation::concat`] over a sequence, left to right.
    pub fn concat_all<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Validation>,
    {
        validations
            .into_iter()
            .fold(Validation::empty(), Validation::concat)
    }

    /// Build directly from chains, keeping their order.
    pub fn from_violations(violations: Vec<ViolationChain>) -> Self {
        Validation { violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violation chains.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[ViolationChain] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<ViolationChain> {
        self.violations
    }

    /// Wrap every chain with `Location(label, ..)`, keeping the order.
    pub fn decorate(self, label: impl Into<String>) -> Self {
        if self.violations.is_empty() {
            return self;
        }
        let label = label.into();
        Validation {
            violations: self
                .violations
                .into_iter()
                .map(|chain| chain.located(label.clone()))
                .collect(),
        }
    }
}

impl FromIterator<Validation> for Validation {
    fn from_iter<I: IntoIterator<Item = Validation>>(iter: I) -> Self {
        Validation::concat_all(iter)
    }
}

impl IntoIterator for Validation {
    type Item = ViolationChain;
    type IntoIter = std::vec::IntoIter<ViolationChain>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

// ============================================================================
// INVARIANT DSL
// ============================================================================

/// Valid if `condition` holds, otherwise a single `Violated(reason)`.
///
/// Phrase `reason` as what must hold ("the list is sorted"), not as the failure.
pub fn check(condition: bool, reason: impl Into<String>) -> Validation {
    if condition {
        Validation::empty()
    } else {
        Validation {
            violations: vec![ViolationChain::Violated(reason.into())],
        }
    }
}

/// [`check`] with the operands flipped, for reading as a declaration.
pub fn declare(reason: impl Into<String>, condition: bool) -> Validation {
    check(condition, reason)
}

/// The identity validation.
pub fn valid() -> Validation {
    Validation::empty()
}

/// A validation that always fails with `reason`.
pub fn invalid(reason: impl Into<String>) -> Validation {
    check(false, reason)
}

/// Validation for types whose representation already guarantees every invariant.
///
/// Taking the value by reference is the whole check: a Rust value that can be borrowed
/// has already been fully constructed.
pub fn trivial_validation<T: ?Sized>(_value: &T) -> Validation {
    Validation::empty()
}
