use metis_harness::fixture::Fixture;
use metis_harness::generator::{
    write_dump, CaseGenerator, CaseSource, ConfigError, FixtureShape, GeneratorConfig,
};
use proptest::prelude::*;

fn config_with_seed(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        count: 8,
        min_len: 0,
        max_len: 10,
        value_range: (-15, 15),
        seed,
    }
}

#[test]
fn identical_seeds_reproduce_identical_batches() {
    let mut first = CaseGenerator::new(config_with_seed(42)).expect("config should validate");
    let mut second = CaseGenerator::new(config_with_seed(42)).expect("config should validate");

    assert_eq!(first.string_pairs(), second.string_pairs());
    assert_eq!(first.int_vectors(), second.int_vectors());
    assert_eq!(first.rsa_inputs(), second.rsa_inputs());
}

#[test]
fn generated_batches_respect_configured_bounds() {
    let config = config_with_seed(7);
    let mut generator = CaseGenerator::new(config).expect("config should validate");

    for fixture in generator.int_vectors() {
        let Fixture::IntVector { values } = fixture else {
            panic!("unexpected fixture shape");
        };
        assert!(values.len() <= config.max_len);
        assert!(values
            .iter()
            .all(|v| (config.value_range.0..=config.value_range.1).contains(v)));
    }

    for fixture in generator.vector_targets() {
        let Fixture::VectorTarget { values, .. } = fixture else {
            panic!("unexpected fixture shape");
        };
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "must stay sorted");
    }

    for fixture in generator.point_sets() {
        let Fixture::PointSet { points } = fixture else {
            panic!("unexpected fixture shape");
        };
        assert!(points.len() >= 2, "closest pair needs at least two points");
    }
}

#[test]
fn malformed_configurations_fail_before_generation() {
    let inverted_lengths = GeneratorConfig {
        min_len: 9,
        max_len: 3,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        CaseGenerator::new(inverted_lengths),
        Err(ConfigError::InvertedLengthBounds { min: 9, max: 3 })
    ));

    let inverted_values = GeneratorConfig {
        value_range: (10, -10),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        CaseGenerator::new(inverted_values),
        Err(ConfigError::InvertedValueRange { low: 10, high: -10 })
    ));

    let empty_batch = GeneratorConfig {
        count: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        CaseGenerator::new(empty_batch),
        Err(ConfigError::EmptyBatch)
    ));
}

#[test]
fn literal_and_generated_sources_are_both_supported() {
    let literal = CaseSource::Literal {
        fixtures: vec![Fixture::IntVector {
            values: vec![1, 2, 3],
        }],
    };
    let resolved = literal.resolve().expect("literal sources cannot fail");
    assert_eq!(resolved.len(), 1);

    let generated = CaseSource::Generated {
        config: config_with_seed(11),
        shape: FixtureShape::StringPair,
    };
    let first = generated.resolve().expect("valid config should resolve");
    let second = generated.resolve().expect("valid config should resolve");
    assert_eq!(first, second, "resolution must be deterministic");
    assert_eq!(first.len(), 8);
}

#[test]
fn dump_writes_one_block_per_fixture() {
    let fixtures = vec![
        Fixture::StringPair {
            source: "abc".to_string(),
            target: "a".to_string(),
        },
        Fixture::IntVector {
            values: vec![1, 2, 3],
        },
    ];
    let mut buffer = Vec::new();
    write_dump(&fixtures, &mut buffer).expect("writing to memory cannot fail");
    let text = String::from_utf8(buffer).expect("dump is valid utf-8");

    assert!(text.contains("# fixture 0"));
    assert!(text.contains("# fixture 1"));
    assert!(text.contains("string_pair source=\"abc\" target=\"a\""));
    assert!(text.contains("int_vector values=[1, 2, 3]"));
}

proptest! {
    #[test]
    fn every_seed_is_reproducible(seed in any::<u64>()) {
        let source = CaseSource::Generated {
            config: config_with_seed(seed),
            shape: FixtureShape::SegmentedVector,
        };
        let first = source.resolve().expect("valid config should resolve");
        let second = source.resolve().expect("valid config should resolve");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn string_lengths_stay_inside_bounds(seed in any::<u64>()) {
        let mut generator = CaseGenerator::new(config_with_seed(seed))
            .expect("config should validate");
        for fixture in generator.string_pairs() {
            let Fixture::StringPair { source, target } = fixture else {
                panic!("unexpected fixture shape");
            };
            prop_assert!(source.chars().count() <= 10);
            prop_assert!(target.chars().count() <= source.chars().count());
        }
    }
}
