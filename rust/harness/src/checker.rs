//! Relation checking for a single (fixture, transform) pair.
//!
//! The checker computes the source output from the unmodified fixture before
//! the transform derives its follow-up, since several transform families read
//! the pre-transform fixture to pick their parameters.  Kernel errors and
//! exceeded time budgets are faults of the function under test, recorded
//! distinctly from relation violations; neither aborts the surrounding batch.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fixture::{Fixture, Output};
use crate::relation::{RelationKind, Soundness};
use crate::transform::TransformCatalog;

mod duration_format {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Single-method capability abstracting the function under test.
///
/// Implementations are pure, deterministic and side-effect free; the harness
/// never inspects anything beyond the returned output.
pub trait Evaluate {
    fn name(&self) -> &'static str;
    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError>;
}

/// Errors surfaced by a function under test.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("fixture shape mismatch: expected {expected}, found {found}")]
    UnsupportedFixture {
        expected: &'static str,
        found: &'static str,
    },
    #[error("kernel rejected input: {0}")]
    Kernel(String),
    #[error("evaluation exceeded the {limit:?} wall-clock budget")]
    BudgetExceeded { limit: Duration },
}

/// Wall-clock budget applied to each kernel invocation.
///
/// An in-flight call runs to completion; an over-budget result is discarded
/// and the case records a fault.  A zero budget disables the check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvalBudget {
    #[serde(with = "duration_format")]
    pub wall_time: Duration,
}

impl Default for EvalBudget {
    fn default() -> Self {
        Self {
            wall_time: Duration::from_millis(200),
        }
    }
}

impl EvalBudget {
    pub const fn unlimited() -> Self {
        Self {
            wall_time: Duration::ZERO,
        }
    }
}

/// Outcome of one (fixture, transform) case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Pass,
    Fail {
        expected: String,
        source_output: Output,
        follow_output: Output,
    },
    Skipped {
        reason: String,
    },
    Fault {
        detail: String,
    },
}

/// Everything needed to reproduce one case deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub function: String,
    pub transform: String,
    pub relation: Option<RelationKind>,
    pub soundness: Soundness,
    pub fixture: Fixture,
    pub follow_fixture: Option<Fixture>,
    pub outcome: CaseOutcome,
}

fn timed_eval(
    evaluator: &dyn Evaluate,
    fixture: &Fixture,
    budget: EvalBudget,
) -> Result<Output, EvalError> {
    let start = Instant::now();
    let output = evaluator.evaluate(fixture)?;
    if !budget.wall_time.is_zero() && start.elapsed() > budget.wall_time {
        return Err(EvalError::BudgetExceeded {
            limit: budget.wall_time,
        });
    }
    Ok(output)
}

/// Executes one case and records its outcome.
pub fn check_case(
    evaluator: &dyn Evaluate,
    catalog: &TransformCatalog,
    fixture: &Fixture,
    transform_name: &str,
    budget: EvalBudget,
) -> CaseRecord {
    let mut record = CaseRecord {
        function: evaluator.name().to_string(),
        transform: transform_name.to_string(),
        relation: None,
        soundness: Soundness::Sound,
        fixture: fixture.clone(),
        follow_fixture: None,
        outcome: CaseOutcome::Pass,
    };

    let Some(transform) = catalog.get(transform_name) else {
        record.outcome = CaseOutcome::Fault {
            detail: format!("unknown transform '{transform_name}'"),
        };
        return record;
    };
    record.relation = Some(transform.relation().kind());
    record.soundness = transform.soundness();

    let source_output = match timed_eval(evaluator, fixture, budget) {
        Ok(output) => output,
        Err(err) => {
            record.outcome = CaseOutcome::Fault {
                detail: format!("source evaluation failed: {err}"),
            };
            return record;
        }
    };

    let Some(follow_fixture) = transform.apply(fixture) else {
        record.outcome = CaseOutcome::Skipped {
            reason: format!("precondition of '{transform_name}' not met"),
        };
        return record;
    };

    let follow_output = match timed_eval(evaluator, &follow_fixture, budget) {
        Ok(output) => output,
        Err(err) => {
            record.follow_fixture = Some(follow_fixture);
            record.outcome = CaseOutcome::Fault {
                detail: format!("follow-up evaluation failed: {err}"),
            };
            return record;
        }
    };

    record.outcome = match transform
        .relation()
        .holds(&source_output, &follow_output, fixture, &follow_fixture)
    {
        Ok(check) if check.satisfied => CaseOutcome::Pass,
        Ok(check) => CaseOutcome::Fail {
            expected: check.expected,
            source_output,
            follow_output,
        },
        Err(err) => CaseOutcome::Fault {
            detail: err.to_string(),
        },
    };
    record.follow_fixture = Some(follow_fixture);
    record
}
