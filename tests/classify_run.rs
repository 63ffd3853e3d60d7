mod common;
use common::ClassifyRunnerBuilder;

use pretty_assertions::{assert_eq, assert_ne};

/// The synthetic family of the worked example: two reference daughters
/// (mean=0.2, sample std≈0.1414) and two sons on either side of the
/// multiplier=1 threshold (0.2 + 1 x 0.1414 ≈ 0.3414).
fn synthetic_family() -> ClassifyRunnerBuilder {
    ClassifyRunnerBuilder::new()
        .joined("dau1", "F", "F4", "A", 0.1)
        .joined("dau2", "F", "F4", "A", 0.3)
        .joined("son1", "M", "F4", "A", 0.5)
        .joined("son2", "M", "F4", "A", 0.25)
}

#[test]
fn sweep_produces_twelve_tables_with_every_joined_individual() {
    let runner = synthetic_family().run().expect("Pipeline must succeed");

    let labels = runner.output_labels().expect("Failed to list output tables");
    assert_eq!(labels, vec![
        "m1", "m1sqrt", "m1square",
        "m2", "m2sqrt", "m2square",
        "m3", "m3sqrt", "m3square",
        "m4", "m4sqrt", "m4square",
    ]);

    for label in &labels {
        let table = runner.read_table(label).expect("Failed to read output table");
        assert_eq!(table[0], vec!["Name", "Sex", "Generation", "Family", "F", "Ploidy"]);

        let mut names: Vec<&str> = table[1..].iter().map(|row| row[0].as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["dau1", "dau2", "son1", "son2"]);
    }
}

#[test]
fn worked_example_splits_the_sons() {
    let runner = synthetic_family().run().expect("Pipeline must succeed");

    // threshold(m1) ≈ 0.3414: son1 (0.5) lies above, son2 (0.25) below.
    assert_eq!(runner.ploidy_of("m1", "son1").unwrap(), "Haploid");
    assert_eq!(runner.ploidy_of("m1", "son2").unwrap(), "Diploid");

    // Daughters are never labeled.
    assert_eq!(runner.ploidy_of("m1", "dau1").unwrap(), "NA");
    assert_eq!(runner.ploidy_of("m1", "dau2").unwrap(), "NA");
}

#[test]
fn transforms_reshape_the_threshold() {
    let runner = synthetic_family().run().expect("Pipeline must succeed");

    // sqrt inflates a std below 1: threshold(m1sqrt) ≈ 0.2 + 0.376 = 0.576.
    assert_eq!(runner.ploidy_of("m1sqrt", "son1").unwrap(), "Diploid");

    // square deflates it: threshold(m1square) = 0.2 + 0.02 = 0.22.
    assert_eq!(runner.ploidy_of("m1square", "son1").unwrap(), "Haploid");
    assert_eq!(runner.ploidy_of("m1square", "son2").unwrap(), "Haploid");

    // Larger multipliers only shrink the haploid set: threshold(m4) ≈ 0.766.
    assert_eq!(runner.ploidy_of("m4", "son1").unwrap(), "Diploid");
}

#[test]
fn unmatched_individuals_never_reach_the_outputs() {
    let runner = synthetic_family()
        .individual("meta_only", "M", "F4", "A")
        .coefficient("summary_only", 0.42)
        .run().expect("Pipeline must succeed");

    for label in runner.output_labels().unwrap() {
        let table = runner.read_table(&label).unwrap();
        for row in &table[1..] {
            assert!(row[0] != "meta_only" && row[0] != "summary_only",
                "Unjoined individual leaked into table '{label}'");
        }
    }
}

#[test]
fn daughterless_family_males_are_kept_unclassified() {
    let runner = synthetic_family()
        .joined("orphan", "M", "F4", "B", 0.8)
        .joined("only_dau", "F", "F4", "C", 0.2)
        .joined("halfref", "M", "F4", "C", 0.9)
        .run().expect("Pipeline must succeed");

    for label in runner.output_labels().unwrap() {
        // Family B carries no reference daughters, family C a single one:
        // neither yields a defined threshold, yet both males stay within the
        // output, unlabeled.
        assert_eq!(runner.ploidy_of(&label, "orphan").unwrap(), "NA");
        assert_eq!(runner.ploidy_of(&label, "halfref").unwrap(), "NA");
        assert_ne!(runner.ploidy_of(&label, "son1").unwrap(), "NA");
    }
}

#[test]
fn disjoint_tables_yield_header_only_outputs() {
    let runner = ClassifyRunnerBuilder::new()
        .individual("ACH04", "F", "F4", "A")
        .coefficient("XXX01", 0.1)
        .run().expect("An empty join is not an error");

    let labels = runner.output_labels().unwrap();
    assert_eq!(labels.len(), 12);
    for label in &labels {
        let table = runner.read_table(label).unwrap();
        assert_eq!(table.len(), 1, "Table '{label}' should only carry a header");
    }
}

#[test]
fn missing_input_table_aborts_with_the_path() {
    let tmpdir  = tempfile::tempdir().unwrap();
    let missing = tmpdir.path().join("individuals");
    let summary = tmpdir.path().join("summary");
    std::fs::write(&summary, "INDV\tF\nACH04\t0.1\n").unwrap();

    let err = classify::run(&missing, &summary, &tmpdir.path().join("ploidy"))
        .expect_err("A missing metadata table must abort the run");
    assert!(format!("{err:#}").contains(&missing.display().to_string()));
}
