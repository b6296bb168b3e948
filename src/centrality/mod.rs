//! Sentence centrality
//!
//! A sentence's centrality is the sum of its overlap similarities with every
//! other sentence of the document. This module turns a sentence list into
//! per-sentence scores and the [`ScoreMap`] the selector looks sentences up
//! in.

pub mod score_map;

pub use score_map::ScoreMap;

use crate::graph::matrix::SimilarityMatrix;
use crate::nlp::segmenter::sentences;
use crate::pipeline::traits::{SimilarityMeasure, WordOverlap};
use crate::types::{Sentence, DEFAULT_PARALLEL_THRESHOLD};

/// Result of a centrality computation
#[derive(Debug, Clone)]
pub struct CentralityResult {
    /// Sentences that were ranked, in document order
    pub sentences: Vec<Sentence>,
    /// Score for each sentence (indexed by sentence position)
    pub scores: Vec<f64>,
}

impl CentralityResult {
    /// Create a new centrality result
    pub fn new(sentences: Vec<Sentence>, scores: Vec<f64>) -> Self {
        Self { sentences, scores }
    }

    /// Number of ranked sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no sentences were ranked
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the score for a specific sentence index
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Get the top N sentence indices by score, ties in document order
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Key each score by its sentence's normalized text
    ///
    /// Later sentences overwrite earlier ones with the same key.
    pub fn score_map(&self) -> ScoreMap {
        let mut map = ScoreMap::with_capacity(self.scores.len());
        for (sentence, &score) in self.sentences.iter().zip(&self.scores) {
            map.insert(sentence.normalized.as_str(), score);
        }
        map
    }
}

/// Score already-segmented sentences with `measure`
pub fn rank_sentences<M: SimilarityMeasure>(
    sentences: Vec<Sentence>,
    measure: &M,
    parallel_threshold: usize,
) -> CentralityResult {
    let matrix = SimilarityMatrix::build(&sentences, measure, parallel_threshold);
    let scores = matrix.centrality_scores();
    CentralityResult::new(sentences, scores)
}

/// Segment `text` and score its sentences by word overlap
pub fn centrality(text: &str) -> CentralityResult {
    rank_sentences(sentences(text), &WordOverlap, DEFAULT_PARALLEL_THRESHOLD)
}

/// Build the score map for a document
pub fn rank(text: &str) -> ScoreMap {
    centrality(text).score_map()
}
