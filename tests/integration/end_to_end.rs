// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{TempWorkspace, parse_report, word_cloud};

#[test]
fn counts_literal_text() {
    word_cloud()
        .arg("The dog and the Dog ran, the dog-house fell!")
        .assert()
        .success()
        .stdout("\ndog 2\ndoghouse 1\nfell 1\nran 1\n");
}

#[test]
fn prefix_and_min_count_example() {
    word_cloud()
        .args([
            "my dog is lazy, labeled like larry, larry likes larry and labeled larry",
            "--mincounts=2",
            "--startswith=la",
        ])
        .assert()
        .success()
        .stdout("\nlabeled 2\nlarry 4\n");
}

#[test]
fn stop_words_only_print_blank_line() {
    word_cloud().arg("a am an as me I do").assert().success().stdout("\n");
}

#[test]
fn file_is_read_instead_of_its_path() {
    let text = "five five five five five four four four four three three three two two one";
    let ws = TempWorkspace::new();
    let path = ws.create_file("counts.txt", text);

    let from_file = word_cloud().arg(&path).assert().success().get_output().stdout.clone();
    let from_literal = word_cloud().arg(text).assert().success().get_output().stdout.clone();

    assert_eq!(from_file, from_literal);
    assert_eq!(
        parse_report(&from_file),
        [("five".to_owned(), 5), ("four".to_owned(), 4), ("one".to_owned(), 1), ("three".to_owned(), 3), ("two".to_owned(), 2)]
    );
}

#[test]
fn file_given_through_input_flag() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("story.txt", "Larry met Moe.\nLarry left!");

    word_cloud()
        .arg("--input")
        .arg(&path)
        .arg("ignored positional")
        .assert()
        .success()
        .stdout("\nlarry 2\nleft 1\nmet 1\nmoe 1\n");
}

#[test]
fn missing_file_is_analysed_as_text() {
    word_cloud()
        .arg("no/such/notes.txt")
        .assert()
        .success()
        .stdout("\nnosuchnotestxt 1\n");
}

#[test]
fn output_is_sorted_and_clean() {
    let text = "Zebra apple, Mango! apple 42 it's zebra ZEBRA café the THE mango-tree";
    let output = word_cloud().arg(text).assert().success().get_output().stdout.clone();
    let report = parse_report(&output);

    let words: Vec<&str> = report.iter().map(|(w, _)| w.as_str()).collect();
    assert!(words.windows(2).all(|pair| pair[0] < pair[1]), "{words:?}");
    assert!(words.iter().all(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())));
    assert_eq!(words, ["apple", "mango", "mangotree", "zebra"]);
}

#[test]
fn repeated_runs_are_identical() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("repeat.txt", "beta alpha gamma alpha beta alpha");

    let first = word_cloud().arg(&path).arg("--mincounts=2").assert().success().get_output().stdout.clone();
    let second = word_cloud().arg(&path).arg("--mincounts=2").assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).expect("utf-8"), "\nalpha 3\nbeta 2\n");
}

#[test]
fn verbose_diagnostics_stay_off_stdout() {
    word_cloud()
        .args(["-vvv", "The dog ran"])
        .assert()
        .success()
        .stdout("\ndog 1\nran 1\n")
        .stderr(predicate::str::contains("stop word"));
}
