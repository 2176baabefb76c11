// crates/ports/src/input.rs
use std::path::PathBuf;

/// Text obtained from the user's input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedText {
    /// The input named a readable file; these are its full contents.
    File { path: PathBuf, contents: String },
    /// The input is the text itself.
    Literal(String),
}

impl ResolvedText {
    pub fn text(&self) -> &str {
        match self {
            Self::File { contents, .. } => contents,
            Self::Literal(text) => text,
        }
    }

}

/// Port for turning an input string into analysable text.
///
/// Implementations never fail: anything that cannot be read as a file is
/// returned as [`ResolvedText::Literal`].
pub trait TextSource {
    fn resolve(&self, input: &str) -> ResolvedText;
}
