//! Word-overlap similarity
//!
//! Sentences are compared as sets of space-separated words. The similarity
//! is the intersection size divided by the mean of the two set sizes.

use rustc_hash::FxHashSet;

/// The distinct words of a sentence
///
/// Words are obtained by splitting on single spaces, so runs of spaces
/// contribute an empty word. Borrowed from the sentence text.
#[derive(Debug, Clone, Default)]
pub struct WordSet<'a> {
    words: FxHashSet<&'a str>,
}

impl<'a> WordSet<'a> {
    /// Build the word set of a sentence
    pub fn from_sentence(sentence: &'a str) -> Self {
        Self {
            words: sentence.split(' ').collect(),
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if `word` is in the set
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words shared with `other`
    pub fn intersection_len(&self, other: &WordSet<'_>) -> usize {
        // Probe the larger set with the smaller one
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.words.iter().filter(|w| large.words.contains(*w)).count()
    }
}

/// Overlap similarity between two word sets
///
/// Returns 0 when the sets share nothing or are both empty.
pub fn overlap_similarity(a: &WordSet<'_>, b: &WordSet<'_>) -> f64 {
    let shared = a.intersection_len(b);
    if shared == 0 {
        return 0.0;
    }

    let mean_size = (a.len() + b.len()) as f64 / 2.0;
    if mean_size == 0.0 {
        return 0.0;
    }

    shared as f64 / mean_size
}

/// Overlap similarity between two raw sentences
pub fn sentence_similarity(a: &str, b: &str) -> f64 {
    overlap_similarity(&WordSet::from_sentence(a), &WordSet::from_sentence(b))
}
