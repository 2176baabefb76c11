use word_cloud_shared_kernel::DomainResult;

use crate::{
    config::{CountRange, Prefix},
    text::WordFilter,
};

/// Domain representation of resolved run options.
///
/// Only constructible through [`Config::new`], which rejects an inverted
/// count range, so an existing `Config` is always runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    input: String,
    prefix: Prefix,
    counts: CountRange,
}

impl Config {
    pub fn new(input: impl Into<String>, prefix: Prefix, counts: CountRange) -> DomainResult<Self> {
        let counts = counts.validate()?;
        Ok(Self { input: input.into(), prefix, counts })
    }

    /// Literal text or a path naming the file to analyse.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn counts(&self) -> CountRange {
        self.counts
    }

    pub fn word_filter(&self) -> WordFilter {
        WordFilter::new(self.prefix.clone())
    }
}
