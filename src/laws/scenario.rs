// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Named scenarios, suites of scenarios, and the law runner.
//!
//! A [`Scenario`] is one universally quantified law over one generator. A [`Suite`]
//! is a named tree of scenarios. Running a suite evaluates every scenario on its own:
//! a failing law never stops its siblings, and the report lists results in
//! declaration order even when the `parallel` feature spreads them over threads.
//!
//! Within one scenario, sampling and shrinking are sequential: each shrink step
//! starts from the previous failing sample. Generators must shrink in finitely many
//! steps.

use std::fmt::{self, Debug};
use std::sync::Arc;

use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{TestCaseError, TestError};

use super::config::LawConfig;
use super::generator::Generator;
use crate::error::LawFailure;

/// What a property returns for one sample.
pub trait Verdict {
    fn verdict(self) -> Result<(), String>;
}

impl Verdict for bool {
    fn verdict(self) -> Result<(), String> {
        if self {
            Ok(())
        } else {
            Err("the property does not hold".to_string())
        }
    }
}

impl Verdict for Result<(), String> {
    fn verdict(self) -> Result<(), String> {
        self
    }
}

/// Sample `strategy`, and shrink the first failing sample to a local minimum.
pub fn forall<T, P, V>(
    law: &str,
    strategy: &BoxedStrategy<T>,
    property: P,
    config: &LawConfig,
) -> Result<(), LawFailure>
where
    T: Debug,
    P: Fn(&T) -> V,
    V: Verdict,
{
    let mut runner = config.runner();
    runner
        .run(strategy, |sample| {
            property(&sample).verdict().map_err(TestCaseError::fail)
        })
        .map_err(|error| match error {
            TestError::Fail(reason, sample) => LawFailure::Counterexample {
                law: law.to_string(),
                reason: reason.message().to_string(),
                counterexample: format!("{:?}", sample),
            },
            TestError::Abort(reason) => LawFailure::GaveUp {
                law: law.to_string(),
                reason: reason.message().to_string(),
            },
        })
}

/// Both sides of an equation, or the pair that disagreed.
pub(crate) fn agree<T: Debug + PartialEq>(left: &T, right: &T) -> Result<(), String> {
    if left == right {
        Ok(())
    } else {
        Err(format!("{:?} != {:?}", left, right))
    }
}

type Check = dyn Fn(&LawConfig) -> Result<(), LawFailure> + Send + Sync;

/// One named law, ready to run.
#[derive(Clone)]
pub struct Scenario {
    name: String,
    check: Arc<Check>,
}

impl Scenario {
    /// A scenario from an arbitrary check.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&LawConfig) -> Result<(), LawFailure> + Send + Sync + 'static,
    {
        Scenario {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// `property` holds for every value `generator` produces.
    pub fn forall<T, G, P, V>(name: impl Into<String>, generator: G, property: P) -> Self
    where
        T: Debug + 'static,
        G: Generator<T> + 'static,
        P: Fn(&T) -> V + Send + Sync + 'static,
        V: Verdict,
    {
        let name = name.into();
        let law = name.clone();
        Scenario::new(name, move |config| {
            forall(&law, &generator.strategy(), &property, config)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self, config: &LawConfig) -> Result<(), LawFailure> {
        (self.check)(config)
    }
}

impl Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

// ============================================================================
// SUITES
// ============================================================================

#[derive(Debug, Clone)]
enum Entry {
    Scenario(Scenario),
    Group(Suite),
}

/// A named, nestable group of scenarios.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    entries: Vec<Entry>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Suite {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.entries.push(Entry::Scenario(scenario));
        self
    }

    pub fn group(mut self, suite: Suite) -> Self {
        self.entries.push(Entry::Group(suite));
        self
    }

    /// Number of scenarios, counting nested groups.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match entry {
                Entry::Scenario(_) => 1,
                Entry::Group(suite) => suite.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every scenario with its full path (`suite / group / law`), in declaration order.
    pub fn scenarios(&self) -> Vec<(String, &Scenario)> {
        let mut out = Vec::with_capacity(self.len());
        self.collect_into(&self.name, &mut out);
        out
    }

    fn collect_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Scenario)>) {
        for entry in &self.entries {
            match entry {
                Entry::Scenario(scenario) => {
                    out.push((format!("{} / {}", prefix, scenario.name()), scenario));
                }
                Entry::Group(suite) => {
                    suite.collect_into(&format!("{} / {}", prefix, suite.name), out);
                }
            }
        }
    }

    /// Run every scenario independently.
    pub fn run(&self, config: &LawConfig) -> SuiteReport {
        let scenarios = self.scenarios();

        #[cfg(feature = "parallel")]
        let outcomes: Vec<Outcome> = {
            use rayon::prelude::*;
            scenarios
                .par_iter()
                .map(|(path, scenario)| run_one(path, scenario, config))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Outcome> = scenarios
            .iter()
            .map(|(path, scenario)| run_one(path, scenario, config))
            .collect();

        let report = SuiteReport {
            suite: self.name.clone(),
            outcomes,
        };
        tracing::debug!(
            suite = %self.name,
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        report
    }

    /// Run with [`LawConfig::from_env`] and panic with the report if any law failed.
    ///
    /// This is the hook into `#[test]` functions.
    pub fn assert_holds(&self) {
        let config = LawConfig::from_env()
            .unwrap_or_else(|error| panic!("invalid law configuration: {}", error));
        self.assert_holds_with(&config);
    }

    pub fn assert_holds_with(&self, config: &LawConfig) {
        let report = self.run(config);
        if !report.is_success() {
            panic!("{}", report);
        }
    }
}

fn run_one(path: &str, scenario: &Scenario, config: &LawConfig) -> Outcome {
    tracing::debug!(scenario = %path, cases = config.cases, "checking law");
    let result = scenario.run(config);
    if let Err(failure) = &result {
        tracing::warn!(scenario = %path, error = %failure, "law violated");
    }
    Outcome {
        path: path.to_string(),
        result,
    }
}

// ============================================================================
// REPORTS
// ============================================================================

/// The result of one scenario within a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub path: String,
    pub result: Result<(), LawFailure>,
}

/// Results of a suite run, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub suite: String,
    pub outcomes: Vec<Outcome>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &LawFailure)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Ok(()) => None,
            Err(failure) => Some((outcome.path.as_str(), failure)),
        })
    }

    /// Outcome of the scenario at `path`, if it ran.
    pub fn outcome(&self, path: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|outcome| outcome.path == path)
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} passed, {} failed",
            self.suite,
            self.passed(),
            self.failed()
        )?;
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "  ✓ {}", outcome.path)?,
                Err(failure) => {
                    writeln!(f, "  ✗ {}", outcome.path)?;
                    for line in failure.to_string().lines() {
                        writeln!(f, "      {}", line)?;
                    }
                }
            }
        }
        Ok(())
    }
}
