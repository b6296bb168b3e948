//! Sentence normalization
//!
//! Produces the lookup key for a sentence by dropping everything that is not
//! a word character. Whitespace and punctuation differences between two
//! occurrences of a sentence therefore do not change its key.

/// Whether `c` is a word character: ASCII letter, ASCII digit or underscore
///
/// Non-ASCII letters are not word characters, so "Café" keys as "Caf".
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Remove every non-word character from `sentence`
pub fn normalize(sentence: &str) -> String {
    sentence.chars().filter(|&c| is_word_char(c)).collect()
}

/// Whether `sentence` normalizes to the empty string
///
/// Such sentences are never selected for a summary.
pub fn is_blank_sentence(sentence: &str) -> bool {
    !sentence.chars().any(is_word_char)
}
