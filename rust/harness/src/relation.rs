//! Relation algebra deciding whether two observed outputs satisfy a declared
//! metamorphic relation.
//!
//! Every relation is decidable from the two concrete outputs (and, for exact
//! formulas, the two fixtures) without re-invoking the function under test.
//! The decision deliberately returns a value rather than asserting so the
//! checker can keep skip, fault and violation as distinct outcomes.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fixture::{Fixture, Output};

/// Computes the expected follow-up output for an exact-formula relation.
///
/// Arguments are the source output, the source fixture and the follow-up
/// fixture.  Returning `None` means the formula is undefined for this pair,
/// which the checker records as a fault.
pub type FormulaFn = fn(&Output, &Fixture, &Fixture) -> Option<Output>;

/// Declared connection between `F(source)` and `F(follow_up)`.
#[derive(Debug, Clone, Copy)]
pub enum Relation {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    StrictlyGreater,
    Exact { label: &'static str, expected: FormulaFn },
}

/// Serializable tag identifying a relation in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
    StrictlyGreater,
    Exact,
}

/// Whether a ported oracle claim is trusted or flagged as questionable.
///
/// `Suspect` marks declared relations that do not hold in general; their
/// violations are tallied separately and never count as defects of the
/// function under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Soundness {
    Sound,
    Suspect,
}

/// Decision for one relation over two concrete outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationCheck {
    pub satisfied: bool,
    /// Human-readable statement of what the follow-up output had to be.
    pub expected: String,
}

/// Raised when a relation cannot be decided from the observed outputs.
#[derive(Debug, Error)]
pub enum RelationError {
    #[error("outputs are not comparable: source is {source_kind}, follow-up is {follow}")]
    Incomparable {
        source_kind: &'static str,
        follow: &'static str,
    },
    #[error("exact-formula relation '{label}' is undefined for this fixture pair")]
    FormulaUnavailable { label: &'static str },
}

impl Relation {
    pub fn kind(&self) -> RelationKind {
        match self {
            Relation::Equal => RelationKind::Equal,
            Relation::GreaterOrEqual => RelationKind::GreaterOrEqual,
            Relation::LessOrEqual => RelationKind::LessOrEqual,
            Relation::StrictlyGreater => RelationKind::StrictlyGreater,
            Relation::Exact { .. } => RelationKind::Exact,
        }
    }

    /// Decides the relation for `source` and `follow` outputs.
    pub fn holds(
        &self,
        source: &Output,
        follow: &Output,
        source_fixture: &Fixture,
        follow_fixture: &Fixture,
    ) -> Result<RelationCheck, RelationError> {
        let (accepts, symbol): (fn(Ordering) -> bool, &str) = match self {
            Relation::Exact { label, expected } => {
                let Some(expected_output) = expected(source, source_fixture, follow_fixture)
                else {
                    return Err(RelationError::FormulaUnavailable { label: *label });
                };
                return Ok(RelationCheck {
                    satisfied: *follow == expected_output,
                    expected: format!("== {expected_output:?} ({label})"),
                });
            }
            Relation::Equal => (|o| o == Ordering::Equal, "=="),
            Relation::GreaterOrEqual => (|o| o != Ordering::Less, ">="),
            Relation::LessOrEqual => (|o| o != Ordering::Greater, "<="),
            Relation::StrictlyGreater => (|o| o == Ordering::Greater, ">"),
        };

        let ordering = follow
            .compare(source)
            .ok_or(RelationError::Incomparable {
                source_kind: source.kind(),
                follow: follow.kind(),
            })?;
        Ok(RelationCheck {
            satisfied: accepts(ordering),
            expected: format!("{symbol} {source:?}"),
        })
    }
}
