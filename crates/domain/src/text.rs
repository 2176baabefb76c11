//! Token handling: whitespace splitting, normalisation, stop words and the
//! eligibility predicate applied to every normalised token.

pub mod filter;
pub mod normalize;
pub mod stop_words;

pub use filter::{Rejection, WordFilter, check_word, is_good_word};
pub use normalize::{normalize, tokens};
pub use stop_words::{STOP_WORDS, is_stop_word};
