//! Metamorphic suites binding the kernel catalog to the transform library.

use metis_harness::checker::Evaluate;
use metis_harness::fixture::{Fixture, Output};
use metis_harness::generator::{CaseSource, FixtureShape, GeneratorConfig};
use metis_harness::runner::{run_suite, RunOptions, SuiteReport};
use metis_harness::transform::TransformCatalog;
use metis_kernels::catalog::{
    BinarySearch, ClosestPair, DistinctSubsequences, EditDistance, FirstMissingPositive,
    Interleaving, MultiSegmentSum, ToyRsa,
};

fn run_literal(
    name: &str,
    evaluator: &dyn Evaluate,
    fixtures: Vec<Fixture>,
    transforms: &[&str],
) -> SuiteReport {
    let catalog = TransformCatalog::standard();
    let source = CaseSource::Literal { fixtures };
    run_suite(
        name,
        evaluator,
        &catalog,
        &source,
        transforms,
        &RunOptions::default(),
    )
    .expect("literal sources cannot fail")
}

fn run_generated(
    name: &str,
    evaluator: &dyn Evaluate,
    shape: FixtureShape,
    seed: u64,
    transforms: &[&str],
) -> SuiteReport {
    let catalog = TransformCatalog::standard();
    let source = CaseSource::Generated {
        config: GeneratorConfig {
            count: 24,
            seed,
            ..GeneratorConfig::default()
        },
        shape,
    };
    run_suite(
        name,
        evaluator,
        &catalog,
        &source,
        transforms,
        &RunOptions::default(),
    )
    .expect("default generator bounds are valid")
}

fn assert_clean(report: &SuiteReport) {
    assert!(
        report.ok(),
        "suite '{}' found defects:\n{}",
        report.suite,
        report.render()
    );
    assert!(report.passed > 0, "suite '{}' never exercised a case", report.suite);
}

#[test]
fn appending_to_the_source_grows_the_subsequence_count() {
    let fixture = Fixture::StringPair {
        source: "abc".to_string(),
        target: "a".to_string(),
    };
    assert_eq!(
        DistinctSubsequences.evaluate(&fixture).expect("valid fixture"),
        Output::Int(1)
    );

    let report = run_literal(
        "subsequence_growth",
        &DistinctSubsequences,
        vec![fixture],
        &["append_to_source"],
    );
    assert_clean(&report);
    assert_eq!(report.passed, 1);
}

#[test]
fn padding_the_target_pins_the_edit_distance_to_the_length_difference() {
    let fixture = Fixture::StringPair {
        source: "prefix".to_string(),
        target: "anything".to_string(),
    };
    let report = run_literal(
        "edit_distance_padding",
        &EditDistance,
        vec![fixture],
        &["pad_target_suffix"],
    );
    assert_clean(&report);

    // The derived pair is ("prefix", "prefixsuffix"), six insertions apart.
    let padded = Fixture::StringPair {
        source: "prefix".to_string(),
        target: "prefixsuffix".to_string(),
    };
    assert_eq!(
        EditDistance.evaluate(&padded).expect("valid fixture"),
        Output::Int(6)
    );
}

#[test]
fn values_beyond_the_gap_leave_the_first_missing_positive_alone() {
    let fixture = Fixture::IntVector {
        values: vec![1, 2, 3],
    };
    assert_eq!(
        FirstMissingPositive.evaluate(&fixture).expect("valid fixture"),
        Output::Int(4)
    );

    let report = run_literal(
        "missing_positive_gap",
        &FirstMissingPositive,
        vec![fixture],
        &["append_beyond_gap", "append_missing_value"],
    );
    assert_clean(&report);
    assert_eq!(report.passed, 2);
}

#[test]
fn absent_targets_stay_absent_under_order_preserving_maps() {
    let fixture = Fixture::VectorTarget {
        values: vec![1, 2, 3, 4, 5],
        target: 99,
    };
    assert_eq!(
        BinarySearch.evaluate(&fixture).expect("valid fixture"),
        Output::Int(-1)
    );

    let report = run_literal(
        "binary_search_absence",
        &BinarySearch,
        vec![fixture],
        &[
            "shift_vector_target",
            "scale_vector_target",
            "retarget_above_range",
        ],
    );
    assert_clean(&report);
    assert_eq!(report.passed, 3);
}

#[test]
fn subsequence_relations_hold_over_generated_pairs() {
    let report = run_generated(
        "subsequence_sweep",
        &DistinctSubsequences,
        FixtureShape::StringPair,
        101,
        &[
            "mirror_pair",
            "case_flip_pair",
            "append_foreign_char",
            "append_to_source",
            "prepend_to_source",
            "append_target_copy",
            "truncate_source",
        ],
    );
    assert_clean(&report);
}

#[test]
fn edit_distance_relations_hold_over_generated_pairs() {
    let report = run_generated(
        "edit_distance_sweep",
        &EditDistance,
        FixtureShape::StringPair,
        102,
        &[
            "mirror_pair",
            "case_flip_pair",
            "append_shared_suffix",
            "collapse_pair",
            "pad_target_suffix",
        ],
    );
    assert_clean(&report);
}

#[test]
fn missing_positive_relations_hold_over_generated_vectors() {
    let report = run_generated(
        "missing_positive_sweep",
        &FirstMissingPositive,
        FixtureShape::IntVector,
        103,
        &[
            "reverse_vector",
            "rotate_vector",
            "sort_vector",
            "append_beyond_gap",
            "append_missing_value",
        ],
    );
    assert_clean(&report);
}

#[test]
fn binary_search_relations_hold_over_generated_lookups() {
    let report = run_generated(
        "binary_search_sweep",
        &BinarySearch,
        FixtureShape::VectorTarget,
        104,
        &[
            "shift_vector_target",
            "scale_vector_target",
            "retarget_above_range",
        ],
    );
    assert_clean(&report);
}

#[test]
fn closest_pair_relations_hold_over_generated_point_sets() {
    let report = run_generated(
        "closest_pair_sweep",
        &ClosestPair,
        FixtureShape::PointSet,
        105,
        &[
            "translate_points",
            "reflect_points",
            "scale_points",
            "append_point",
        ],
    );
    assert_clean(&report);
}

#[test]
fn interleaving_relations_hold_over_generated_triples() {
    let report = run_generated(
        "interleaving_sweep",
        &Interleaving,
        FixtureShape::StringTriple,
        106,
        &["mirror_triple", "swap_sources"],
    );
    assert_clean(&report);
}

#[test]
fn segment_sum_relations_hold_over_generated_vectors() {
    let report = run_generated(
        "segment_sum_sweep",
        &MultiSegmentSum,
        FixtureShape::SegmentedVector,
        107,
        &[
            "extend_segments",
            "raise_segment_limit",
            "drop_last_element",
        ],
    );
    assert_clean(&report);
}

#[test]
fn rsa_relations_hold_over_generated_keys() {
    let report = run_generated(
        "rsa_sweep",
        &ToyRsa,
        FixtureShape::RsaInput,
        108,
        &[
            "shift_message_by_modulus",
            "swap_primes",
            "bump_exponent_by_totient",
        ],
    );
    assert_clean(&report);
}

#[test]
fn the_anagram_oracle_fails_as_expected_without_failing_the_suite() {
    let report = run_literal(
        "anagram_suspect",
        &EditDistance,
        vec![Fixture::StringPair {
            source: "ab".to_string(),
            target: "ba".to_string(),
        }],
        &["anagram_pair"],
    );
    assert_eq!(report.suspect_failures, 1, "{}", report.render());
    assert_eq!(report.failed, 0);
    assert!(report.ok(), "a suspect oracle must not fail the kernel");
}

#[test]
fn a_degenerate_fixture_faults_alone() {
    let report = run_literal(
        "rsa_fault_isolation",
        &ToyRsa,
        vec![
            Fixture::RsaInput {
                message: 5,
                exponent: 3,
                p: 1,
                q: 11,
            },
            Fixture::RsaInput {
                message: 5,
                exponent: 3,
                p: 3,
                q: 11,
            },
        ],
        &["swap_primes", "shift_message_by_modulus"],
    );
    assert_eq!(report.faulted, 2, "{}", report.render());
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 0);
    assert!(!report.ok(), "faults count against the run");
}

#[test]
fn double_mirroring_restores_the_fixture_and_the_output() {
    let catalog = TransformCatalog::standard();
    let mirror = catalog.get("mirror_pair").expect("catalog has mirror_pair");
    let original = Fixture::StringPair {
        source: "abl".to_string(),
        target: "bla".to_string(),
    };

    let once = mirror.apply(&original).expect("string pairs are mirrorable");
    let twice = mirror.apply(&once).expect("string pairs are mirrorable");
    assert_eq!(twice, original);

    let base = EditDistance.evaluate(&original).expect("valid fixture");
    assert_eq!(EditDistance.evaluate(&once).expect("valid fixture"), base);
    assert_eq!(EditDistance.evaluate(&twice).expect("valid fixture"), base);
}

#[test]
fn every_transform_handles_empty_inputs_without_crashing() {
    let catalog = TransformCatalog::standard();
    let empty_fixtures = [
        Fixture::StringPair {
            source: String::new(),
            target: String::new(),
        },
        Fixture::IntVector { values: Vec::new() },
        Fixture::VectorTarget {
            values: Vec::new(),
            target: 0,
        },
        Fixture::PointSet { points: Vec::new() },
        Fixture::StringTriple {
            left: String::new(),
            right: String::new(),
            woven: String::new(),
        },
        Fixture::SegmentedVector {
            values: Vec::new(),
            segments: 1,
        },
        Fixture::RsaInput {
            message: 0,
            exponent: 0,
            p: 0,
            q: 0,
        },
    ];

    for name in catalog.names() {
        let transform = catalog.get(name).expect("listed transforms exist");
        for fixture in &empty_fixtures {
            // Either a defined follow-up or a skip; never a panic.
            let _ = transform.apply(fixture);
        }
    }
}
