// tests/common/mod.rs
//! Shared helpers for the binary tests.

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub fn word_cloud() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_cloud"))
}

/// Temporary directory that is removed on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).expect("write temp file");
        path
    }
}

/// Parse `word count` lines after the leading blank line.
pub fn parse_report(stdout: &[u8]) -> Vec<(String, usize)> {
    let text = std::str::from_utf8(stdout).expect("utf-8 stdout");
    let body = text.strip_prefix('\n').expect("report starts with a blank line");
    body.lines()
        .map(|line| {
            let (word, count) = line.split_once(' ').expect("word and count");
            (word.to_owned(), count.parse().expect("numeric count"))
        })
        .collect()
}
