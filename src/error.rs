// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Broken invariants are not errors: they are data in a [`crate::Validation`].
//! The types here cover the law runner and its configuration.

use thiserror::Error;

/// A law that did not hold, or could not be checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawFailure {
    /// A sample falsified the law. `counterexample` is the shrunk sample's `Debug` form.
    #[error("{law} failed: {reason}\nminimal counterexample: {counterexample}")]
    Counterexample {
        law: String,
        reason: String,
        counterexample: String,
    },
    /// The generator could not produce enough samples (usually a filter that rejects
    /// almost everything).
    #[error("{law} gave up: {reason}")]
    GaveUp { law: String, reason: String },
}

impl LawFailure {
    /// Name of the law that failed.
    pub fn law(&self) -> &str {
        match self {
            LawFailure::Counterexample { law, .. } | LawFailure::GaveUp { law, .. } => law,
        }
    }

    pub fn counterexample(&self) -> Option<&str> {
        match self {
            LawFailure::Counterexample { counterexample, .. } => Some(counterexample),
            LawFailure::GaveUp { .. } => None,
        }
    }
}

/// Invalid law-runner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable could not be read into its field.
    #[error(transparent)]
    Source(#[from] ::config::ConfigError),
    #[error("{var} must be at least 1")]
    Zero { var: &'static str },
}
