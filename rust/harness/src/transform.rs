//! Catalog of named input transformations and their declared output relations.
//!
//! Every transform is a pure mapping from one fixture to a new fixture.  A
//! transform either supports the fixture it is given or returns `None`, which
//! the checker records as a skip; undefined behaviour is never an option.
//! Each apply function documents the structural argument that justifies its
//! declared relation, because that argument is what makes the relation a
//! usable oracle rather than a guess.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fixture::{Fixture, Output};
use crate::relation::{Relation, Soundness};

type ApplyFn = fn(&Fixture) -> Option<Fixture>;

/// Design-level grouping of transforms by the shape of their relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformFamily {
    Invariant,
    Growth,
    Shrink,
    Exact,
}

/// Named pure transformation paired with its declared relation.
#[derive(Debug, Clone)]
pub struct Transform {
    name: &'static str,
    family: TransformFamily,
    soundness: Soundness,
    relation: Relation,
    apply: ApplyFn,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn family(&self) -> TransformFamily {
        self.family
    }

    pub fn soundness(&self) -> Soundness {
        self.soundness
    }

    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// Derives the follow-up fixture, or `None` when the precondition fails.
    pub fn apply(&self, fixture: &Fixture) -> Option<Fixture> {
        (self.apply)(fixture)
    }
}

/// Registry of available transforms, keyed by name.
#[derive(Debug, Clone)]
pub struct TransformCatalog {
    registry: HashMap<String, Transform>,
}

impl TransformCatalog {
    /// Construct the default catalog used by the suite runner.
    pub fn standard() -> Self {
        let mut registry = HashMap::new();
        for transform in catalog_entries() {
            registry.insert(transform.name.to_string(), transform);
        }
        Self { registry }
    }

    pub fn get(&self, name: &str) -> Option<&Transform> {
        self.registry.get(name)
    }

    /// Applies a transform by name, yielding the follow-up fixture and the
    /// declared relation.  `None` covers both unknown names and unmet
    /// preconditions; callers that need to tell the two apart use [`get`].
    ///
    /// [`get`]: TransformCatalog::get
    pub fn apply<'a>(&'a self, name: &str, fixture: &Fixture) -> Option<(Fixture, &'a Relation)> {
        let transform = self.registry.get(name)?;
        let follow = transform.apply(fixture)?;
        Some((follow, &transform.relation))
    }

    /// Catalog names in deterministic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

fn catalog_entries() -> Vec<Transform> {
    vec![
        Transform {
            name: "mirror_pair",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: mirror_pair,
        },
        Transform {
            name: "case_flip_pair",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: case_flip_pair,
        },
        Transform {
            name: "append_shared_suffix",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: append_shared_suffix,
        },
        Transform {
            name: "append_foreign_char",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: append_foreign_char,
        },
        Transform {
            name: "append_to_source",
            family: TransformFamily::Growth,
            soundness: Soundness::Sound,
            relation: Relation::GreaterOrEqual,
            apply: append_to_source,
        },
        Transform {
            name: "prepend_to_source",
            family: TransformFamily::Growth,
            soundness: Soundness::Sound,
            relation: Relation::GreaterOrEqual,
            apply: prepend_to_source,
        },
        Transform {
            name: "append_target_copy",
            family: TransformFamily::Growth,
            soundness: Soundness::Sound,
            relation: Relation::StrictlyGreater,
            apply: append_target_copy,
        },
        Transform {
            name: "truncate_source",
            family: TransformFamily::Shrink,
            soundness: Soundness::Sound,
            relation: Relation::LessOrEqual,
            apply: truncate_source,
        },
        Transform {
            name: "collapse_pair",
            family: TransformFamily::Exact,
            soundness: Soundness::Sound,
            relation: Relation::Exact {
                label: "identical strings need no edits",
                expected: zero_output,
            },
            apply: collapse_pair,
        },
        Transform {
            name: "pad_target_suffix",
            family: TransformFamily::Exact,
            soundness: Soundness::Sound,
            relation: Relation::Exact {
                label: "distance to a padded copy is the length difference",
                expected: length_difference,
            },
            apply: pad_target_suffix,
        },
        Transform {
            name: "anagram_pair",
            family: TransformFamily::Invariant,
            soundness: Soundness::Suspect,
            relation: Relation::Equal,
            apply: anagram_pair,
        },
        Transform {
            name: "reverse_vector",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: reverse_vector,
        },
        Transform {
            name: "rotate_vector",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: rotate_vector,
        },
        Transform {
            name: "sort_vector",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: sort_vector,
        },
        Transform {
            name: "append_beyond_gap",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: append_beyond_gap,
        },
        Transform {
            name: "append_missing_value",
            family: TransformFamily::Growth,
            soundness: Soundness::Sound,
            relation: Relation::StrictlyGreater,
            apply: append_missing_value,
        },
        Transform {
            name: "shift_vector_target",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: shift_vector_target,
        },
        Transform {
            name: "scale_vector_target",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: scale_vector_target,
        },
        Transform {
            name: "retarget_above_range",
            family: TransformFamily::Exact,
            soundness: Soundness::Sound,
            relation: Relation::Exact {
                label: "a target above every element is absent",
                expected: absent_sentinel,
            },
            apply: retarget_above_range,
        },
        Transform {
            name: "translate_points",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: translate_points,
        },
        Transform {
            name: "reflect_points",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: reflect_points,
        },
        Transform {
            name: "scale_points",
            family: TransformFamily::Exact,
            soundness: Soundness::Sound,
            relation: Relation::Exact {
                label: "doubling coordinates quadruples squared distances",
                expected: quadrupled_output,
            },
            apply: scale_points,
        },
        Transform {
            name: "append_point",
            family: TransformFamily::Shrink,
            soundness: Soundness::Sound,
            relation: Relation::LessOrEqual,
            apply: append_point,
        },
        Transform {
            name: "mirror_triple",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: mirror_triple,
        },
        Transform {
            name: "swap_sources",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: swap_sources,
        },
        Transform {
            name: "extend_segments",
            family: TransformFamily::Growth,
            soundness: Soundness::Sound,
            relation: Relation::GreaterOrEqual,
            apply: extend_segments,
        },
        Transform {
            name: "raise_segment_limit",
            family: TransformFamily::Growth,
            soundness: Soundness::Sound,
            relation: Relation::GreaterOrEqual,
            apply: raise_segment_limit,
        },
        Transform {
            name: "drop_last_element",
            family: TransformFamily::Shrink,
            soundness: Soundness::Sound,
            relation: Relation::LessOrEqual,
            apply: drop_last_element,
        },
        Transform {
            name: "shift_message_by_modulus",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: shift_message_by_modulus,
        },
        Transform {
            name: "swap_primes",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: swap_primes,
        },
        Transform {
            name: "bump_exponent_by_totient",
            family: TransformFamily::Invariant,
            soundness: Soundness::Sound,
            relation: Relation::Equal,
            apply: bump_exponent_by_totient,
        },
    ]
}

// ---------------------------------------------------------------------------
// String-pair transforms
// ---------------------------------------------------------------------------

/// Reverses both strings.  Every subsequence match and every edit script
/// survives when both operands are reversed, so the output is unchanged.
fn mirror_pair(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } => Some(Fixture::StringPair {
            source: source.chars().rev().collect(),
            target: target.chars().rev().collect(),
        }),
        _ => None,
    }
}

/// Flips ASCII case in both strings.  Case flipping is a bijective relabeling
/// of the alphabet; applied to both operands it preserves exactly which
/// positions match.
fn case_flip_pair(fixture: &Fixture) -> Option<Fixture> {
    fn flip(text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }
    match fixture {
        Fixture::StringPair { source, target } => Some(Fixture::StringPair {
            source: flip(source),
            target: flip(target),
        }),
        _ => None,
    }
}

/// Appends the same character to both strings.  An optimal edit script for
/// the extended pair ends with a free match, so the edit distance is
/// unchanged.
fn append_shared_suffix(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } => Some(Fixture::StringPair {
            source: format!("{source}x"),
            target: format!("{target}x"),
        }),
        _ => None,
    }
}

/// Appends to the source a letter that does not occur in the target.  The new
/// character cannot participate in any target match, so the distinct
/// subsequence count is unchanged.  Skipped when the target already uses the
/// whole lowercase alphabet.
fn append_foreign_char(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } => {
            let foreign = ('a'..='z').find(|c| !target.contains(*c))?;
            let mut extended = source.clone();
            extended.push(foreign);
            Some(Fixture::StringPair {
                source: extended,
                target: target.clone(),
            })
        }
        _ => None,
    }
}

/// Appends one character to the source.  Every subsequence match in the
/// shorter source remains valid in the longer one, so the count can only
/// grow.
fn append_to_source(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } => {
            let appended = target.chars().next().unwrap_or('a');
            let mut extended = source.clone();
            extended.push(appended);
            Some(Fixture::StringPair {
                source: extended,
                target: target.clone(),
            })
        }
        _ => None,
    }
}

/// Prepends one character to the source; the same superset argument as
/// [`append_to_source`] applies.
fn prepend_to_source(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } => {
            let prepended = target.chars().next().unwrap_or('a');
            Some(Fixture::StringPair {
                source: format!("{prepended}{source}"),
                target: target.clone(),
            })
        }
        _ => None,
    }
}

/// Appends a full copy of the target to the source.  Old matches survive and
/// the appended copy matches the target outright, so the count grows
/// strictly.  Requires a non-empty target.
fn append_target_copy(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } if !target.is_empty() => {
            Some(Fixture::StringPair {
                source: format!("{source}{target}"),
                target: target.clone(),
            })
        }
        _ => None,
    }
}

/// Drops the last character of the source.  Matches in the truncated source
/// are a subset of the original matches.  Requires a non-empty source.
fn truncate_source(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, target } if !source.is_empty() => {
            let mut truncated = source.clone();
            truncated.pop();
            Some(Fixture::StringPair {
                source: truncated,
                target: target.clone(),
            })
        }
        _ => None,
    }
}

/// Replaces the target with a copy of the source; identical strings are zero
/// edits apart.
fn collapse_pair(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, .. } => Some(Fixture::StringPair {
            source: source.clone(),
            target: source.clone(),
        }),
        _ => None,
    }
}

/// Replaces the target with the source plus a fixed suffix.  Turning one
/// string into an extension of itself takes exactly one insertion per added
/// character.
fn pad_target_suffix(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringPair { source, .. } => Some(Fixture::StringPair {
            source: source.clone(),
            target: format!("{source}suffix"),
        }),
        _ => None,
    }
}

/// Sorts the characters of both strings.  The declared claim that the edit
/// distance is unchanged is false in general (`"ab"`/`"ba"` has distance 2,
/// the sorted pair distance 0); it is kept as a flagged, expected-failing
/// oracle.
fn anagram_pair(fixture: &Fixture) -> Option<Fixture> {
    fn sorted(text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
    match fixture {
        Fixture::StringPair { source, target } => Some(Fixture::StringPair {
            source: sorted(source),
            target: sorted(target),
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Integer-vector transforms
// ---------------------------------------------------------------------------

/// Reverses the vector.  The first missing positive depends only on which
/// values are present.  Requires a non-empty vector.
fn reverse_vector(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::IntVector { values } if !values.is_empty() => {
            let mut reversed = values.clone();
            reversed.reverse();
            Some(Fixture::IntVector { values: reversed })
        }
        _ => None,
    }
}

/// Rotates the vector left by one position; membership is untouched.
/// Requires at least two elements for the rotation to be meaningful.
fn rotate_vector(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::IntVector { values } if values.len() >= 2 => {
            let mut rotated = values.clone();
            rotated.rotate_left(1);
            Some(Fixture::IntVector { values: rotated })
        }
        _ => None,
    }
}

/// Sorts the vector; membership is untouched.
fn sort_vector(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::IntVector { values } => {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            Some(Fixture::IntVector { values: sorted })
        }
        _ => None,
    }
}

/// Appends three values strictly beyond the current first missing positive.
/// The gap they skip is still the gap, so the output is unchanged.  The
/// appended values are derived from the pre-transform fixture.
fn append_beyond_gap(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::IntVector { values } => {
            let missing = first_missing_positive(values);
            let mut extended = values.clone();
            extended.extend([missing + 1, missing + 2, missing + 3]);
            Some(Fixture::IntVector { values: extended })
        }
        _ => None,
    }
}

/// Appends the current first missing positive itself, which plugs the gap and
/// forces the answer strictly upward.
fn append_missing_value(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::IntVector { values } => {
            let missing = first_missing_positive(values);
            let mut extended = values.clone();
            extended.push(missing);
            Some(Fixture::IntVector { values: extended })
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Vector-plus-target transforms
// ---------------------------------------------------------------------------

/// Adds the same constant to every element and to the target.  Translation
/// preserves relative order and membership, so the found position (or the
/// absence sentinel) is unchanged.
fn shift_vector_target(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::VectorTarget { values, target } => Some(Fixture::VectorTarget {
            values: values.iter().map(|v| v + 7).collect(),
            target: target + 7,
        }),
        _ => None,
    }
}

/// Multiplies every element and the target by a positive constant; strictly
/// monotone maps preserve order and membership.
fn scale_vector_target(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::VectorTarget { values, target } => Some(Fixture::VectorTarget {
            values: values.iter().map(|v| v * 3).collect(),
            target: target * 3,
        }),
        _ => None,
    }
}

/// Retargets the search above the vector maximum; the lookup must report the
/// absence sentinel.  The new target is derived from the pre-transform
/// fixture.
fn retarget_above_range(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::VectorTarget { values, .. } => {
            let above = values.iter().copied().max().unwrap_or(0) + 1;
            Some(Fixture::VectorTarget {
                values: values.clone(),
                target: above,
            })
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Point-set transforms
// ---------------------------------------------------------------------------

/// Translates every point by the same offset; pairwise distances are
/// translation-invariant, and integer offsets keep the arithmetic exact.
fn translate_points(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::PointSet { points } => Some(Fixture::PointSet {
            points: points.iter().map(|(x, y)| (x + 3, y - 2)).collect(),
        }),
        _ => None,
    }
}

/// Reflects every point across the y axis; reflection is an isometry.
fn reflect_points(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::PointSet { points } => Some(Fixture::PointSet {
            points: points.iter().map(|(x, y)| (-x, *y)).collect(),
        }),
        _ => None,
    }
}

/// Doubles every coordinate; every squared pairwise distance is multiplied
/// by exactly four.
fn scale_points(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::PointSet { points } => Some(Fixture::PointSet {
            points: points.iter().map(|(x, y)| (x * 2, y * 2)).collect(),
        }),
        _ => None,
    }
}

/// Appends one extra point.  The original pairs are still candidates, so the
/// minimum squared distance can only shrink or stay.  Requires a non-empty
/// set to derive the new point from.
fn append_point(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::PointSet { points } if !points.is_empty() => {
            let max_x = points.iter().map(|(x, _)| *x).max()?;
            let max_y = points.iter().map(|(_, y)| *y).max()?;
            let mut extended = points.clone();
            extended.push((max_x + 17, max_y + 23));
            Some(Fixture::PointSet { points: extended })
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// String-triple transforms
// ---------------------------------------------------------------------------

/// Reverses all three strings.  Reading an interleaving backwards yields an
/// interleaving of the reversed sources, and vice versa.
fn mirror_triple(fixture: &Fixture) -> Option<Fixture> {
    fn reversed(text: &str) -> String {
        text.chars().rev().collect()
    }
    match fixture {
        Fixture::StringTriple { left, right, woven } => Some(Fixture::StringTriple {
            left: reversed(left),
            right: reversed(right),
            woven: reversed(woven),
        }),
        _ => None,
    }
}

/// Swaps the two source strings; the interleaving definition is symmetric in
/// its sources.
fn swap_sources(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::StringTriple { left, right, woven } => Some(Fixture::StringTriple {
            left: right.clone(),
            right: left.clone(),
            woven: woven.clone(),
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Segmented-vector transforms
// ---------------------------------------------------------------------------

/// Appends a copy of the current maximum (or a unit when empty).  Any
/// selection of segments in the shorter vector is still available in the
/// longer one, so the optimum can only grow.
fn extend_segments(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::SegmentedVector { values, segments } => {
            let appended = values.iter().copied().max().unwrap_or(1);
            let mut extended = values.clone();
            extended.push(appended);
            Some(Fixture::SegmentedVector {
                values: extended,
                segments: *segments,
            })
        }
        _ => None,
    }
}

/// Raises the segment budget by one; every selection under the smaller
/// budget remains admissible under the larger one.
fn raise_segment_limit(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::SegmentedVector { values, segments } => Some(Fixture::SegmentedVector {
            values: values.clone(),
            segments: segments + 1,
        }),
        _ => None,
    }
}

/// Drops the last element.  Selections in the truncated vector are a subset
/// of the original selections.  Requires a non-empty vector.
fn drop_last_element(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::SegmentedVector { values, segments } if !values.is_empty() => {
            let mut truncated = values.clone();
            truncated.pop();
            Some(Fixture::SegmentedVector {
                values: truncated,
                segments: *segments,
            })
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// RSA transforms
// ---------------------------------------------------------------------------

/// Shifts the message by the modulus.  Congruent messages encrypt to the same
/// ciphertext.  Skipped when the modulus is degenerate or the shift would
/// overflow.
fn shift_message_by_modulus(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::RsaInput {
            message,
            exponent,
            p,
            q,
        } => {
            let modulus = p.checked_mul(*q).filter(|n| *n >= 2)?;
            let shifted = message.checked_add(modulus)?;
            Some(Fixture::RsaInput {
                message: shifted,
                exponent: *exponent,
                p: *p,
                q: *q,
            })
        }
        _ => None,
    }
}

/// Swaps the prime factors; the modulus is their product either way.
fn swap_primes(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::RsaInput {
            message,
            exponent,
            p,
            q,
        } => Some(Fixture::RsaInput {
            message: *message,
            exponent: *exponent,
            p: *q,
            q: *p,
        }),
        _ => None,
    }
}

/// Adds Euler's totient to the exponent.  For distinct primes `p`, `q` and a
/// message coprime to the modulus, `m^(e + phi(n)) = m^e (mod n)`.  The
/// precondition (distinct primality, coprimality, no overflow) is checked
/// against the pre-transform fixture and the transform skips when it fails.
fn bump_exponent_by_totient(fixture: &Fixture) -> Option<Fixture> {
    match fixture {
        Fixture::RsaInput {
            message,
            exponent,
            p,
            q,
        } => {
            if p == q || !is_prime(*p) || !is_prime(*q) {
                return None;
            }
            let modulus = p.checked_mul(*q)?;
            if gcd(*message, modulus) != 1 {
                return None;
            }
            let totient = (p - 1).checked_mul(q - 1)?;
            let bumped = exponent.checked_add(totient)?;
            Some(Fixture::RsaInput {
                message: *message,
                exponent: bumped,
                p: *p,
                q: *q,
            })
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Exact-formula helpers and parameter derivation
// ---------------------------------------------------------------------------

fn zero_output(_: &Output, _: &Fixture, _: &Fixture) -> Option<Output> {
    Some(Output::Int(0))
}

fn absent_sentinel(_: &Output, _: &Fixture, _: &Fixture) -> Option<Output> {
    Some(Output::Int(-1))
}

fn length_difference(_: &Output, _: &Fixture, follow: &Fixture) -> Option<Output> {
    match follow {
        Fixture::StringPair { source, target } => {
            let diff = target.chars().count() as i64 - source.chars().count() as i64;
            Some(Output::Int(diff))
        }
        _ => None,
    }
}

fn quadrupled_output(source: &Output, _: &Fixture, _: &Fixture) -> Option<Output> {
    match source {
        Output::Float(distance) => Some(Output::float(distance.into_inner() * 4.0)),
        _ => None,
    }
}

/// Local copy of the first-missing-positive derivation.  Transforms may read
/// the pre-transform fixture to pick their parameters, and this keeps the
/// harness free of any dependency on the kernels under test.
fn first_missing_positive(values: &[i64]) -> i64 {
    let mut candidate = 1;
    loop {
        if !values.contains(&candidate) {
            return candidate;
        }
        candidate += 1;
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
