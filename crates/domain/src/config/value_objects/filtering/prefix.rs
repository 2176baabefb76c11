// crates/domain/src/config/value_objects/filtering/prefix.rs
use std::fmt;

/// Literal prefix every counted word has to start with.
///
/// Matching is byte-exact against the already normalised word. The prefix
/// itself is never lowercased, so `La` matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty prefix matches every word.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        word.starts_with(self.0.as_str())
    }
}

impl From<&str> for Prefix {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Prefix {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
