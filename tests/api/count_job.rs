//! tests/api/count_job.rs
use crate::helpers::{expected_counts, read_output, scratch_dir, test_data_dir, write_corpus};
use claims::{assert_err, assert_ok};
use countngrams::configuration::{ClusterSettings, Settings};
use countngrams::job::CountJob;
use countngrams::spec::CountSpec;
use countngrams::telemetry::init_tracing;
use std::fs;
use std::sync::LazyLock;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    init_tracing("tests::api::count_job").expect("Failed to setup tracing");
});

fn settings(workers: u16, output_partitions: u16) -> Settings {
    LazyLock::force(&TRACING);
    Settings {
        cluster: ClusterSettings {
            workers,
            output_partitions,
        },
    }
}

fn spec(input_dir: &std::path::Path, output_dir: &std::path::Path, sizes: &str) -> CountSpec {
    CountSpec::new(
        input_dir,
        output_dir,
        sizes.parse().expect("Failed to parse sizes"),
    )
}

#[tokio::test]
async fn should_count_all_enabled_sizes_for_a_single_document() {
    let input_dir = write_corpus(&[("doc.txt", "one two three")]);
    let output_dir = scratch_dir();

    let summary = CountJob::run(spec(&input_dir, &output_dir, "1,2,3"), settings(2, 1))
        .await
        .expect("Failed to run job");

    let counts = read_output(&output_dir);
    assert_eq!(
        counts,
        expected_counts(&[
            ("one", 1),
            ("two", 1),
            ("three", 1),
            ("one_two", 1),
            ("two_three", 1),
            ("one_two_three", 1),
        ])
    );
    assert_eq!(summary.documents, 1);
    assert_eq!(summary.distinct_ngrams, 6);
    assert_eq!(summary.total_count, 6);

    fs::remove_dir_all(input_dir).ok();
    fs::remove_dir_all(output_dir).ok();
}

#[tokio::test]
async fn should_merge_counts_across_documents() {
    let input_dir = write_corpus(&[("0.txt", "one two three"), ("1.txt", "two three four")]);
    let output_dir = scratch_dir();

    assert_ok!(CountJob::run(spec(&input_dir, &output_dir, "1,2"), settings(2, 1)).await);

    let counts = read_output(&output_dir);
    assert_eq!(
        counts,
        expected_counts(&[
            ("one", 1),
            ("two", 2),
            ("three", 2),
            ("four", 1),
            ("one_two", 1),
            ("two_three", 2),
            ("three_four", 1),
        ])
    );

    fs::remove_dir_all(input_dir).ok();
    fs::remove_dir_all(output_dir).ok();
}

#[tokio::test]
async fn ngrams_never_cross_document_boundaries() {
    let input_dir = write_corpus(&[("0.txt", "end"), ("1.txt", "start")]);
    let output_dir = scratch_dir();

    assert_ok!(CountJob::run(spec(&input_dir, &output_dir, "2"), settings(2, 1)).await);

    let counts = read_output(&output_dir);
    assert!(!counts.contains_key("end_start"));
    assert!(counts.is_empty());

    fs::remove_dir_all(input_dir).ok();
    fs::remove_dir_all(output_dir).ok();
}

#[tokio::test]
async fn ngrams_do_cross_line_boundaries_within_a_document() {
    let output_dir = scratch_dir();

    // tests/data/small_test.txt ends its first line with "dog" and starts
    // its second with "the"; whole-file delivery makes that a bigram.
    assert_ok!(CountJob::run(spec(&test_data_dir(), &output_dir, "1,2"), settings(3, 1)).await);

    let counts = read_output(&output_dir);
    assert_eq!(counts.get("the"), Some(&3));
    assert_eq!(counts.get("dog_the"), Some(&1));
    assert_eq!(counts.get("quick_brown"), Some(&2));

    fs::remove_dir_all(output_dir).ok();
}

#[tokio::test]
async fn totals_are_independent_of_worker_count() {
    let input_dir = write_corpus(&[
        ("0.txt", "a b c a b"),
        ("1.txt", "b c d"),
        ("2.txt", "c d e a"),
        ("3.txt", "a"),
    ]);

    let mut outputs = Vec::new();
    for workers in [1, 3, 8] {
        let output_dir = scratch_dir();
        assert_ok!(
            CountJob::run(spec(&input_dir, &output_dir, "1,2,3"), settings(workers, 1)).await
        );
        outputs.push(read_output(&output_dir));
        fs::remove_dir_all(output_dir).ok();
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);

    fs::remove_dir_all(input_dir).ok();
}

#[tokio::test]
async fn partitioned_output_still_holds_every_record_exactly_once() {
    let input_dir = write_corpus(&[("doc.txt", "one two three four five six seven")]);
    let output_dir = scratch_dir();

    assert_ok!(CountJob::run(spec(&input_dir, &output_dir, "1,2"), settings(2, 4)).await);

    // read_output asserts no key appears in two partition files.
    let counts = read_output(&output_dir);
    assert_eq!(counts.len(), 7 + 6);

    fs::remove_dir_all(input_dir).ok();
    fs::remove_dir_all(output_dir).ok();
}

#[tokio::test]
async fn an_empty_corpus_yields_an_empty_output_set() {
    let input_dir = scratch_dir();
    let output_dir = scratch_dir();

    let summary = CountJob::run(spec(&input_dir, &output_dir, "1,2,3,4,5"), settings(2, 1))
        .await
        .expect("Failed to run job");

    assert!(read_output(&output_dir).is_empty());
    assert_eq!(summary.documents, 0);
    assert_eq!(summary.distinct_ngrams, 0);
    assert_eq!(summary.total_count, 0);

    fs::remove_dir_all(input_dir).ok();
    fs::remove_dir_all(output_dir).ok();
}

#[tokio::test]
async fn a_missing_input_directory_fails_the_job() {
    let output_dir = scratch_dir();
    let input_dir = std::path::PathBuf::from("/tmp/countngrams-no-such-corpus");

    assert_err!(CountJob::run(spec(&input_dir, &output_dir, "1"), settings(2, 1)).await);

    fs::remove_dir_all(output_dir).ok();
}
