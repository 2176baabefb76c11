// crates/domain/src/text/normalize.rs

/// Whitespace as classified by C's `isspace` in the "C" locale.
#[inline]
pub const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Split `text` on runs of whitespace, yielding raw tokens lazily.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Lowercase ASCII letters and drop ASCII punctuation.
///
/// Non-ASCII characters pass through untouched; the word filter rejects them.
/// A token made only of punctuation normalises to the empty string.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
