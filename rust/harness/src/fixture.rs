//! Fixture and output model shared by every component of the harness.
//!
//! Fixtures are immutable value types: transformations always produce a new
//! fixture and never mutate the original.  The enum is closed over the input
//! shapes the kernel crate consumes, which keeps transform preconditions and
//! evaluator adapters exhaustive matches rather than downcasts.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Concrete input handed to a function under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Fixture {
    /// Source/target string pair (subsequence counting, edit distance).
    StringPair { source: String, target: String },
    /// Unordered integer vector (first missing positive).
    IntVector { values: Vec<i64> },
    /// Sorted vector plus a lookup target (binary search).
    VectorTarget { values: Vec<i64>, target: i64 },
    /// Integer-grid points (closest pair; squared distances stay exact).
    PointSet { points: Vec<(i64, i64)> },
    /// Two source strings and a candidate weave (interleaving check).
    StringTriple {
        left: String,
        right: String,
        woven: String,
    },
    /// Vector plus a segment budget (multi-segment maximum sum).
    SegmentedVector { values: Vec<i64>, segments: usize },
    /// Message and key material for the toy RSA kernel.
    RsaInput {
        message: u64,
        exponent: u64,
        p: u64,
        q: u64,
    },
}

impl Fixture {
    /// Helpful string describing the variant for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Fixture::StringPair { .. } => "string_pair",
            Fixture::IntVector { .. } => "int_vector",
            Fixture::VectorTarget { .. } => "vector_target",
            Fixture::PointSet { .. } => "point_set",
            Fixture::StringTriple { .. } => "string_triple",
            Fixture::SegmentedVector { .. } => "segmented_vector",
            Fixture::RsaInput { .. } => "rsa_input",
        }
    }

    /// Compact single-line rendering used by dumps and failure reports.
    pub fn describe(&self) -> String {
        match self {
            Fixture::StringPair { source, target } => {
                format!("string_pair source={source:?} target={target:?}")
            }
            Fixture::IntVector { values } => format!("int_vector values={values:?}"),
            Fixture::VectorTarget { values, target } => {
                format!("vector_target values={values:?} target={target}")
            }
            Fixture::PointSet { points } => format!("point_set points={points:?}"),
            Fixture::StringTriple { left, right, woven } => {
                format!("string_triple left={left:?} right={right:?} woven={woven:?}")
            }
            Fixture::SegmentedVector { values, segments } => {
                format!("segmented_vector values={values:?} segments={segments}")
            }
            Fixture::RsaInput {
                message,
                exponent,
                p,
                q,
            } => format!("rsa_input message={message} exponent={exponent} p={p} q={q}"),
        }
    }
}

/// Output produced by a function under test.
///
/// Floats are wrapped in [`OrderedFloat`] so every variant is totally ordered
/// within its own kind and relation checks never need epsilon tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Output {
    Int(i64),
    Bool(bool),
    Float(OrderedFloat<f64>),
}

impl Output {
    /// Convenience constructor wrapping a raw float.
    pub fn float(value: f64) -> Self {
        Output::Float(OrderedFloat(value))
    }

    /// Helpful string describing the variant for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Output::Int(_) => "int",
            Output::Bool(_) => "bool",
            Output::Float(_) => "float",
        }
    }

    /// Compares two outputs of the same kind; `None` across kinds.
    ///
    /// Cross-kind comparisons indicate a miswired suite and are surfaced as a
    /// checker fault rather than an arbitrary ordering.
    pub fn compare(&self, other: &Output) -> Option<Ordering> {
        match (self, other) {
            (Output::Int(lhs), Output::Int(rhs)) => Some(lhs.cmp(rhs)),
            (Output::Bool(lhs), Output::Bool(rhs)) => Some(lhs.cmp(rhs)),
            (Output::Float(lhs), Output::Float(rhs)) => Some(lhs.cmp(rhs)),
            _ => None,
        }
    }
}
