// crates/domain/src/text/stop_words.rs
use std::{collections::HashSet, sync::LazyLock};

/// Common function words that never make it into a word cloud.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "am", "and", "the", "you", "me", "my", "us", "be", "it", "he", "she", "him", "her", "his",
    "hers", "ye", "your", "so", "or", "is", "isnt", "not", "mr", "mrs", "ms", "dr", "sr", "they", "thy",
    "we", "of", "to", "its", "i", "on", "oh", "if", "as", "by", "them", "our", "in", "for", "do", "dont",
    "does", "doesnt", "did", "at", "are",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Exact, case-sensitive membership test against the lowercase stop list.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}
