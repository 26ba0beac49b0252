// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Law runner configuration.
//!
//! | Variable                    | Field              | Default |
//! |-----------------------------|--------------------|---------|
//! | `VALIDITY_CASES`            | `cases`            | 256     |
//! | `VALIDITY_MAX_SHRINK_ITERS` | `max_shrink_iters` | 4096    |
//! | `VALIDITY_MAX_REJECTS`      | `max_rejects`      | 4096    |
//! | `VALIDITY_DETERMINISTIC`    | `deterministic`    | false   |

use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const ENV_PREFIX: &str = "VALIDITY";

/// How many samples each law draws and how hard it shrinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawConfig {
    /// Successful samples required before a law passes.
    pub cases: u32,
    /// Upper bound on shrink steps after a failure.
    pub max_shrink_iters: u32,
    /// Rejected samples (filtered generators) tolerated before giving up.
    pub max_rejects: u32,
    /// Use a fixed RNG seed so failures reproduce exactly.
    pub deterministic: bool,
}

impl Default for LawConfig {
    fn default() -> Self {
        LawConfig {
            cases: 256,
            max_shrink_iters: 4096,
            max_rejects: 4096,
            deterministic: false,
        }
    }
}

impl LawConfig {
    /// Defaults overridden by `VALIDITY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(environment())
    }

    /// Defaults overridden by `vars`, read as if they were the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: ::config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(environment().source(Some(vars)))
    }

    fn load(source: ::config::Environment) -> Result<Self, ConfigError> {
        let config: LawConfig = ::config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        if config.cases == 0 {
            return Err(ConfigError::Zero { var: "VALIDITY_CASES" });
        }
        Ok(config)
    }

    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    pub fn deterministic(mut self) -> Self {
        self.deterministic = true;
        self
    }

    /// A fresh proptest runner. Failure persistence is off: laws never touch the disk.
    pub(crate) fn runner(&self) -> TestRunner {
        let config = Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            max_global_rejects: self.max_rejects,
            failure_persistence: None,
            ..Config::default()
        };
        if self.deterministic {
            TestRunner::new_with_rng(config, TestRng::deterministic_rng(RngAlgorithm::ChaCha))
        } else {
            TestRunner::new(config)
        }
    }
}

fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}
