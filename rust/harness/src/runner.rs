//! Suite execution and aggregate reporting.
//!
//! A suite binds one function under test to a fixture source and a list of
//! transform names.  Execution is sequential and never fail-fast: every case
//! runs so a single pass surfaces the full defect set.  The only
//! pre-execution abort is a malformed generator configuration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::checker::{check_case, CaseOutcome, CaseRecord, EvalBudget, Evaluate};
use crate::generator::{CaseSource, ConfigError};
use crate::relation::Soundness;
use crate::transform::TransformCatalog;

/// Per-run execution policy.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub budget: EvalBudget,
    /// Cooperative cancellation flag, checked between cases.  Remaining
    /// cases are abandoned; completed records are kept.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl RunOptions {
    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Aggregate result of one suite run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub function: String,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub faulted: usize,
    /// Violations of relations flagged [`Soundness::Suspect`]; these are
    /// expected failures of the ported oracle claim, not kernel defects.
    pub suspect_failures: usize,
    pub cancelled: bool,
    pub records: Vec<CaseRecord>,
}

impl SuiteReport {
    fn new(suite: &str, function: &str, records: Vec<CaseRecord>, cancelled: bool) -> Self {
        let mut report = Self {
            suite: suite.to_string(),
            function: function.to_string(),
            passed: 0,
            failed: 0,
            skipped: 0,
            faulted: 0,
            suspect_failures: 0,
            cancelled,
            records,
        };
        for record in &report.records {
            match &record.outcome {
                CaseOutcome::Pass => report.passed += 1,
                CaseOutcome::Fail { .. } => {
                    if record.soundness == Soundness::Suspect {
                        report.suspect_failures += 1;
                    } else {
                        report.failed += 1;
                    }
                }
                CaseOutcome::Skipped { .. } => report.skipped += 1,
                CaseOutcome::Fault { .. } => report.faulted += 1,
            }
        }
        report
    }

    /// True when no defect was observed.  Suspect-relation violations and
    /// cancellation do not count against the function under test.
    pub fn ok(&self) -> bool {
        self.failed == 0 && self.faulted == 0
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Human-readable summary enumerating every failure and fault with
    /// enough context to reproduce it.
    pub fn render(&self) -> String {
        let mut out = format!(
            "suite '{}' on '{}': {} passed, {} failed, {} skipped, {} faulted, {} suspect{}\n",
            self.suite,
            self.function,
            self.passed,
            self.failed,
            self.skipped,
            self.faulted,
            self.suspect_failures,
            if self.cancelled { " (cancelled)" } else { "" },
        );
        for record in &self.records {
            match &record.outcome {
                CaseOutcome::Fail {
                    expected,
                    source_output,
                    follow_output,
                } => {
                    let marker = if record.soundness == Soundness::Suspect {
                        "SUSPECT"
                    } else {
                        "FAIL"
                    };
                    out.push_str(&format!(
                        "{marker} [{}]\n  source fixture: {}\n  follow fixture: {}\n  source output: {source_output:?}\n  follow output: {follow_output:?}\n  expected: {expected}\n",
                        record.transform,
                        record.fixture.describe(),
                        record
                            .follow_fixture
                            .as_ref()
                            .map_or_else(|| "<none>".to_string(), |f| f.describe()),
                    ));
                }
                CaseOutcome::Fault { detail } => {
                    out.push_str(&format!(
                        "FAULT [{}]\n  fixture: {}\n  detail: {detail}\n",
                        record.transform,
                        record.fixture.describe(),
                    ));
                }
                CaseOutcome::Pass | CaseOutcome::Skipped { .. } => {}
            }
        }
        out
    }

    /// Machine-readable rendering for CI consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs every (fixture, transform) combination and aggregates the outcomes.
pub fn run_suite(
    name: &str,
    evaluator: &dyn Evaluate,
    catalog: &TransformCatalog,
    source: &CaseSource,
    transforms: &[&str],
    options: &RunOptions,
) -> Result<SuiteReport, ConfigError> {
    let fixtures = source.resolve()?;
    let mut records = Vec::with_capacity(fixtures.len() * transforms.len());
    let mut cancelled = false;

    'queue: for fixture in &fixtures {
        for transform_name in transforms {
            if options.is_cancelled() {
                cancelled = true;
                break 'queue;
            }
            records.push(check_case(
                evaluator,
                catalog,
                fixture,
                transform_name,
                options.budget,
            ));
        }
    }

    Ok(SuiteReport::new(name, evaluator.name(), records, cancelled))
}
