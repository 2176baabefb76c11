// crates/domain/src/model/entities/word_cloud.rs
use std::collections::{BTreeMap, btree_map};

use log::{debug, trace};
use word_cloud_shared_kernel::Occurrences;

use crate::{
    config::CountRange,
    text::{WordFilter, normalize, tokens},
};

/// Accepted words and how often each one occurred.
///
/// Keys are kept in a `BTreeMap`, so iteration is alphabetical (byte order,
/// which equals dictionary order for `a`-`z`). Every key passed the
/// [`WordFilter`] used to build the cloud and every count is at least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCloud {
    counts: BTreeMap<String, Occurrences>,
}

impl WordCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenise, normalise and filter `text`, counting every accepted word.
    pub fn build(text: &str, filter: &WordFilter) -> Self {
        let mut cloud = Self::new();
        let mut seen = 0usize;

        for token in tokens(text) {
            seen += 1;
            let word = normalize(token);
            match filter.check(&word) {
                Ok(()) => cloud.record(word),
                Err(reason) => trace!("skipping {token:?} -> {word:?}: {reason}"),
            }
        }

        debug!("scanned {seen} tokens, counted {} across {} distinct words", cloud.total(), cloud.len());
        cloud
    }

    /// Count one occurrence of an already accepted word.
    pub fn record(&mut self, word: String) {
        self.counts.entry(word).or_default().increment();
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted occurrences across all words.
    pub fn total(&self) -> Occurrences {
        self.counts.values().fold(Occurrences::zero(), |acc, n| acc + *n)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.counts.iter() }
    }

    /// Alphabetical entries whose count lies inside `range`.
    pub fn within(&self, range: CountRange) -> impl Iterator<Item = (&str, Occurrences)> + '_ {
        self.iter().filter(move |(_, n)| range.contains(n.value()))
    }
}

/// Alphabetical iterator over `(word, count)` pairs.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Occurrences>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Occurrences);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(word, n)| (word.as_str(), *n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a WordCloud {
    type Item = (&'a str, Occurrences);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
