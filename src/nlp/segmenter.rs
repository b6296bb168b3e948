//! Paragraph and sentence segmentation
//!
//! Segmentation is a plain separator split, not grammatical sentence
//! detection: abbreviations, decimals and ellipses are not special-cased.
//! Empty and whitespace-only segments are kept so positions stay stable.

use crate::types::Sentence;

/// Separator between sentences
pub const SENTENCE_SEPARATOR: &str = ". ";

/// Separator between paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split text into sentences
///
/// Every line break counts as a sentence boundary: it is replaced by
/// [`SENTENCE_SEPARATOR`] before splitting.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.replace('\n', SENTENCE_SEPARATOR)
        .split(SENTENCE_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Split text into paragraphs on blank lines, without trimming
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR).collect()
}

/// Split text into indexed [`Sentence`]s carrying their normalized form
pub fn sentences(text: &str) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, raw)| Sentence::new(index, raw))
        .collect()
}
