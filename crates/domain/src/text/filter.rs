// crates/domain/src/text/filter.rs
use std::fmt;

use super::stop_words::is_stop_word;
use crate::config::Prefix;

/// Why a normalised token was left out of the word cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    StopWord,
    PrefixMismatch,
    InvalidCharacter,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Empty => "empty after normalisation",
            Self::StopWord => "stop word",
            Self::PrefixMismatch => "does not start with the required prefix",
            Self::InvalidCharacter => "contains characters outside a-z",
        };
        f.write_str(reason)
    }
}

/// Run the eligibility checks against a plain prefix string.
pub fn check_word(word: &str, required_prefix: &str) -> Result<(), Rejection> {
    WordFilter::new(Prefix::from(required_prefix)).check(word)
}

#[inline]
pub fn is_good_word(word: &str, required_prefix: &str) -> bool {
    check_word(word, required_prefix).is_ok()
}

/// Word eligibility bound to one run's prefix constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFilter {
    prefix: Prefix,
}

impl WordFilter {
    pub fn new(prefix: Prefix) -> Self {
        Self { prefix }
    }

    /// Run the eligibility checks in order and report the first that fails.
    pub fn check(&self, word: &str) -> Result<(), Rejection> {
        if word.is_empty() {
            return Err(Rejection::Empty);
        }
        if is_stop_word(word) {
            return Err(Rejection::StopWord);
        }
        if !self.prefix.matches(word) {
            return Err(Rejection::PrefixMismatch);
        }
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(Rejection::InvalidCharacter);
        }
        Ok(())
    }

    #[inline]
    pub fn accepts(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }
}
