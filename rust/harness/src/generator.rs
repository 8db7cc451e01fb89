//! Deterministic fixture generation.
//!
//! The generator owns its random source: a [`ChaCha8Rng`] seeded from the
//! configuration, so a reported failure can always be replayed from the seed
//! alone and parallel suites never share generator state.  Literal fixture
//! lists are supported side by side with generated batches through
//! [`CaseSource`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fixture::Fixture;

/// Letters used for generated strings; a small alphabet keeps subsequence
/// matches frequent enough to exercise the growth relations.
const ALPHABET: &[u8] = b"abcd";

/// Primes handed to the RSA kernel; products stay far below `u64::MAX`.
const SMALL_PRIMES: &[u64] = &[101, 103, 107, 109, 113, 127, 131, 137, 139, 149];

/// Call-site configurable generation bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of fixtures per batch.
    pub count: usize,
    /// Inclusive bounds on generated collection lengths.
    pub min_len: usize,
    pub max_len: usize,
    /// Inclusive bounds on generated integer values.
    pub value_range: (i64, i64),
    /// Seed for the instance-owned random source.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 16,
            min_len: 0,
            max_len: 12,
            value_range: (-20, 20),
            seed: 1,
        }
    }
}

impl GeneratorConfig {
    /// Rejects malformed bounds before any case runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_len < self.min_len {
            return Err(ConfigError::InvertedLengthBounds {
                min: self.min_len,
                max: self.max_len,
            });
        }
        let (low, high) = self.value_range;
        if high < low {
            return Err(ConfigError::InvertedValueRange { low, high });
        }
        if self.count == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        Ok(())
    }
}

/// Configuration errors raised before generation starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("length bounds are inverted (min {min}, max {max})")]
    InvertedLengthBounds { min: usize, max: usize },
    #[error("value range is inverted (low {low}, high {high})")]
    InvertedValueRange { low: i64, high: i64 },
    #[error("fixture batch count must be positive")]
    EmptyBatch,
}

/// Batch generator for the fixture shapes the kernels consume.
#[derive(Debug, Clone)]
pub struct CaseGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
}

impl CaseGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn next_len(&mut self) -> usize {
        self.rng
            .gen_range(self.config.min_len..=self.config.max_len)
    }

    fn next_value(&mut self) -> i64 {
        let (low, high) = self.config.value_range;
        self.rng.gen_range(low..=high)
    }

    fn next_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    pub fn string_pairs(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let source_len = self.next_len();
                let target_len = self.next_len().min(source_len);
                Fixture::StringPair {
                    source: self.next_string(source_len),
                    target: self.next_string(target_len),
                }
            })
            .collect()
    }

    pub fn int_vectors(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let len = self.next_len();
                Fixture::IntVector {
                    values: (0..len).map(|_| self.next_value()).collect(),
                }
            })
            .collect()
    }

    /// Sorted vectors with a target that is a member roughly half the time.
    pub fn vector_targets(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let len = self.next_len();
                let mut values: Vec<i64> = (0..len).map(|_| self.next_value()).collect();
                values.sort_unstable();
                let target = if !values.is_empty() && self.rng.gen_bool(0.5) {
                    values[self.rng.gen_range(0..values.len())]
                } else {
                    self.next_value()
                };
                Fixture::VectorTarget { values, target }
            })
            .collect()
    }

    /// Point sets always carry at least two points, the closest-pair
    /// kernel's domain minimum.
    pub fn point_sets(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let len = self.next_len().max(2);
                Fixture::PointSet {
                    points: (0..len)
                        .map(|_| (self.next_value(), self.next_value()))
                        .collect(),
                }
            })
            .collect()
    }

    /// Triples where the woven string is a genuine interleaving roughly half
    /// the time, so both boolean outcomes stay represented.
    pub fn string_triples(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let left = {
                    let len = self.next_len();
                    self.next_string(len)
                };
                let right = {
                    let len = self.next_len();
                    self.next_string(len)
                };
                let woven = if self.rng.gen_bool(0.5) {
                    self.weave(&left, &right)
                } else {
                    self.next_string(left.len() + right.len())
                };
                Fixture::StringTriple { left, right, woven }
            })
            .collect()
    }

    fn weave(&mut self, left: &str, right: &str) -> String {
        let mut left_chars = left.chars().peekable();
        let mut right_chars = right.chars().peekable();
        let mut woven = String::with_capacity(left.len() + right.len());
        loop {
            match (left_chars.peek().is_some(), right_chars.peek().is_some()) {
                (false, false) => break,
                (true, false) => woven.extend(&mut left_chars),
                (false, true) => woven.extend(&mut right_chars),
                (true, true) => {
                    let picked = if self.rng.gen_bool(0.5) {
                        left_chars.next()
                    } else {
                        right_chars.next()
                    };
                    if let Some(c) = picked {
                        woven.push(c);
                    }
                }
            }
        }
        woven
    }

    pub fn segmented_vectors(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let len = self.next_len();
                Fixture::SegmentedVector {
                    values: (0..len).map(|_| self.next_value()).collect(),
                    segments: self.rng.gen_range(1..=3),
                }
            })
            .collect()
    }

    pub fn rsa_inputs(&mut self) -> Vec<Fixture> {
        (0..self.config.count)
            .map(|_| {
                let p = SMALL_PRIMES[self.rng.gen_range(0..SMALL_PRIMES.len())];
                let q = SMALL_PRIMES[self.rng.gen_range(0..SMALL_PRIMES.len())];
                Fixture::RsaInput {
                    message: self.rng.gen_range(0..p * q),
                    exponent: self.rng.gen_range(2..=17),
                    p,
                    q,
                }
            })
            .collect()
    }
}

/// Fixture shapes a generated batch can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureShape {
    StringPair,
    IntVector,
    VectorTarget,
    PointSet,
    StringTriple,
    SegmentedVector,
    RsaInput,
}

/// Where a suite's fixtures come from: a literal list for deterministic
/// regression runs, or a seeded generated batch.  Both modes are first-class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CaseSource {
    Literal { fixtures: Vec<Fixture> },
    Generated {
        config: GeneratorConfig,
        shape: FixtureShape,
    },
}

impl CaseSource {
    pub fn resolve(&self) -> Result<Vec<Fixture>, ConfigError> {
        match self {
            CaseSource::Literal { fixtures } => Ok(fixtures.clone()),
            CaseSource::Generated { config, shape } => {
                let mut generator = CaseGenerator::new(*config)?;
                Ok(match shape {
                    FixtureShape::StringPair => generator.string_pairs(),
                    FixtureShape::IntVector => generator.int_vectors(),
                    FixtureShape::VectorTarget => generator.vector_targets(),
                    FixtureShape::PointSet => generator.point_sets(),
                    FixtureShape::StringTriple => generator.string_triples(),
                    FixtureShape::SegmentedVector => generator.segmented_vectors(),
                    FixtureShape::RsaInput => generator.rsa_inputs(),
                })
            }
        }
    }
}

/// Writes one human-readable block per fixture.  The dump is a debugging
/// artifact only; nothing in the harness reads it back.
pub fn write_dump<W: Write>(fixtures: &[Fixture], writer: &mut W) -> io::Result<()> {
    for (index, fixture) in fixtures.iter().enumerate() {
        writeln!(writer, "# fixture {index}")?;
        writeln!(writer, "{}", fixture.describe())?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Best-effort persistence of a generated batch.
pub fn dump_to_path<P: AsRef<Path>>(fixtures: &[Fixture], path: P) -> io::Result<()> {
    let mut buffer = Vec::new();
    write_dump(fixtures, &mut buffer)?;
    fs::write(path, buffer)
}
