//! Word counting and reading-time estimation

use lazy_static::lazy_static;
use regex::Regex;

/// Reading speed used for the estimate
pub const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// Count words in plain text
///
/// A word is a maximal run of word characters, so punctuation and
/// whitespace both act as separators and never count by themselves.
pub fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Estimated reading time in whole minutes, rounded to nearest
pub fn reading_time(total_words: usize) -> usize {
    (total_words as f64 / WORDS_PER_MINUTE as f64).round() as usize
}
