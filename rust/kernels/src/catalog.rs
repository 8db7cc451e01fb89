//! Evaluator adapters binding the kernels to the harness fixture model.
//!
//! Each adapter implements the harness's single-method capability: it accepts
//! exactly one fixture shape and maps everything else to a shape-mismatch
//! error, so a miswired suite surfaces as a fault instead of a bogus verdict.

use metis_harness::checker::{EvalError, Evaluate};
use metis_harness::fixture::{Fixture, Output};

use crate::{
    edit_distance, geometry, interleave, missing, rsa, search, segments, subsequences,
};

fn shape_mismatch(expected: &'static str, fixture: &Fixture) -> EvalError {
    EvalError::UnsupportedFixture {
        expected,
        found: fixture.kind(),
    }
}

/// Distinct-subsequence counting over string pairs.
pub struct DistinctSubsequences;

impl Evaluate for DistinctSubsequences {
    fn name(&self) -> &'static str {
        "distinct_subsequences"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::StringPair { source, target } => {
                let count = subsequences::count_distinct(source, target);
                i64::try_from(count)
                    .map(Output::Int)
                    .map_err(|_| EvalError::Kernel("subsequence count overflows i64".to_string()))
            }
            other => Err(shape_mismatch("string_pair", other)),
        }
    }
}

/// Levenshtein distance over string pairs.
pub struct EditDistance;

impl Evaluate for EditDistance {
    fn name(&self) -> &'static str {
        "edit_distance"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::StringPair { source, target } => {
                Ok(Output::Int(edit_distance::levenshtein(source, target) as i64))
            }
            other => Err(shape_mismatch("string_pair", other)),
        }
    }
}

/// First missing positive over integer vectors.
pub struct FirstMissingPositive;

impl Evaluate for FirstMissingPositive {
    fn name(&self) -> &'static str {
        "first_missing_positive"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::IntVector { values } => {
                Ok(Output::Int(missing::first_missing_positive(values)))
            }
            other => Err(shape_mismatch("int_vector", other)),
        }
    }
}

/// Binary search over sorted vector/target fixtures.
pub struct BinarySearch;

impl Evaluate for BinarySearch {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::VectorTarget { values, target } => {
                Ok(Output::Int(search::binary_search(values, *target)))
            }
            other => Err(shape_mismatch("vector_target", other)),
        }
    }
}

/// Closest pair over point sets; too few points is a kernel fault.
pub struct ClosestPair;

impl Evaluate for ClosestPair {
    fn name(&self) -> &'static str {
        "closest_pair"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::PointSet { points } => geometry::closest_pair_squared(points)
                .map(Output::float)
                .map_err(|err| EvalError::Kernel(err.to_string())),
            other => Err(shape_mismatch("point_set", other)),
        }
    }
}

/// Interleaving check over string triples.
pub struct Interleaving;

impl Evaluate for Interleaving {
    fn name(&self) -> &'static str {
        "interleaving"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::StringTriple { left, right, woven } => Ok(Output::Bool(
                interleave::is_interleaving(left, right, woven),
            )),
            other => Err(shape_mismatch("string_triple", other)),
        }
    }
}

/// Multi-segment maximum sum over segmented vectors.
pub struct MultiSegmentSum;

impl Evaluate for MultiSegmentSum {
    fn name(&self) -> &'static str {
        "multi_segment_sum"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::SegmentedVector { values, segments } => Ok(Output::Int(
                segments::max_multi_segment_sum(values, *segments),
            )),
            other => Err(shape_mismatch("segmented_vector", other)),
        }
    }
}

/// Toy RSA encryption; degenerate key material is a kernel fault.
pub struct ToyRsa;

impl Evaluate for ToyRsa {
    fn name(&self) -> &'static str {
        "toy_rsa"
    }

    fn evaluate(&self, fixture: &Fixture) -> Result<Output, EvalError> {
        match fixture {
            Fixture::RsaInput {
                message,
                exponent,
                p,
                q,
            } => rsa::encrypt(*message, *exponent, *p, *q)
                .map_err(|err| EvalError::Kernel(err.to_string()))
                .and_then(|cipher| {
                    i64::try_from(cipher)
                        .map(Output::Int)
                        .map_err(|_| EvalError::Kernel("ciphertext overflows i64".to_string()))
                }),
            other => Err(shape_mismatch("rsa_input", other)),
        }
    }
}

/// All kernel adapters, one per function under test.
pub fn standard() -> Vec<Box<dyn Evaluate>> {
    vec![
        Box::new(DistinctSubsequences),
        Box::new(EditDistance),
        Box::new(FirstMissingPositive),
        Box::new(BinarySearch),
        Box::new(ClosestPair),
        Box::new(Interleaving),
        Box::new(MultiSegmentSum),
        Box::new(ToyRsa),
    ]
}
