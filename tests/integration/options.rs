// tests/integration/options.rs
use predicates::prelude::*;

use crate::common::{TempWorkspace, parse_report, word_cloud};

const LADDER: &str = "one two two three three three four four four four five five five five five";

#[test]
fn shows_help() {
    word_cloud()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--startswith").and(predicate::str::contains("Examples:")));
}

#[test]
fn short_help_skips_analysis() {
    word_cloud()
        .args(["-h", "some words to count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("words 1").not()));
}

#[test]
fn shows_version() {
    word_cloud()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn min_and_max_bound_printed_counts() {
    let output = word_cloud()
        .args([LADDER, "--mincounts=2", "--maxcounts=4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = parse_report(&output);

    assert_eq!(report, [("four".to_owned(), 4), ("three".to_owned(), 3), ("two".to_owned(), 2)]);
}

#[test]
fn zero_thresholds_are_unconstrained() {
    let output = word_cloud()
        .args([LADDER, "--mincounts=0", "--maxcounts=0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(parse_report(&output).len(), 5);
}

#[test]
fn max_only_does_not_need_min() {
    word_cloud().args([LADDER, "-n=1"]).assert().success().stdout("\none 1\n");
}

#[test]
fn inverted_range_fails_before_reporting() {
    word_cloud()
        .args([LADDER, "--mincounts=5", "--maxcounts=2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Error: invalid configuration: --maxcounts (2) cannot be less than --mincounts (5)\n");
}

#[test]
fn missing_input_is_an_error() {
    word_cloud()
        .arg("--mincounts=2")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no input"));
}

#[test]
fn unknown_option_is_rejected() {
    word_cloud()
        .args(["--frobnicate", LADDER])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn non_numeric_count_is_rejected() {
    word_cloud().args([LADDER, "--mincounts=many"]).assert().code(2);
}

#[test]
fn uppercase_prefix_matches_nothing() {
    // The prefix is compared verbatim against lowercased words.
    word_cloud().args([LADDER, "--startswith=T"]).assert().success().stdout("\n");
    word_cloud().args([LADDER, "--startswith=t"]).assert().success().stdout("\nthree 3\ntwo 2\n");
}

#[test]
fn every_word_honours_prefix_from_file() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("ab.txt", "abacus about above Abbey cab able ab-normal zebra ABOUT");

    let output = word_cloud().arg(&path).arg("--startswith=ab").assert().success().get_output().stdout.clone();
    let report = parse_report(&output);

    assert!(report.iter().all(|(w, _)| w.starts_with("ab")));
    assert_eq!(
        report,
        [
            ("abacus".to_owned(), 1),
            ("abbey".to_owned(), 1),
            ("able".to_owned(), 1),
            ("abnormal".to_owned(), 1),
            ("about".to_owned(), 2),
            ("above".to_owned(), 1)
        ]
    );
}
