//! Dense pairwise similarity matrix
//!
//! Stores similarities for every ordered sentence pair, diagonal included,
//! in one row-major `n × n` buffer. Memory grows quadratically with the
//! sentence count, which bounds the document size this is meant for.

use crate::graph::overlap::WordSet;
use crate::pipeline::traits::SimilarityMeasure;
use crate::types::Sentence;
use rayon::prelude::*;

/// Row-major `n × n` similarity matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of sentences (rows and columns)
    size: usize,
    /// `values[i * size + j]` is `similarity(i, j)`
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix, switching to parallel rows at `parallel_threshold`
    pub fn build<M: SimilarityMeasure>(
        sentences: &[Sentence],
        measure: &M,
        parallel_threshold: usize,
    ) -> Self {
        // For small documents, sequential is faster
        if sentences.len() < parallel_threshold {
            Self::build_sequential(sentences, measure)
        } else {
            Self::build_parallel(sentences, measure)
        }
    }

    /// Build the matrix on the current thread
    pub fn build_sequential<M: SimilarityMeasure>(sentences: &[Sentence], measure: &M) -> Self {
        let word_sets = word_sets(sentences);
        let size = word_sets.len();
        let mut values = vec![0.0; size * size];

        for (i, row) in values.chunks_mut(size.max(1)).enumerate().take(size) {
            fill_row(row, &word_sets[i], &word_sets, measure);
        }

        Self { size, values }
    }

    /// Build the matrix with one rayon task per row
    pub fn build_parallel<M: SimilarityMeasure>(sentences: &[Sentence], measure: &M) -> Self {
        let word_sets = word_sets(sentences);
        let size = word_sets.len();
        if size == 0 {
            return Self::empty();
        }

        let mut values = vec![0.0; size * size];
        values
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(i, row)| fill_row(row, &word_sets[i], &word_sets, measure));

        Self { size, values }
    }

    /// Create an empty matrix
    pub fn empty() -> Self {
        Self {
            size: 0,
            values: Vec::new(),
        }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity of sentence `i` to sentence `j`
    ///
    /// Out-of-range indices read as 0.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= self.size || j >= self.size {
            return 0.0;
        }
        self.values[i * self.size + j]
    }

    /// Similarities of sentence `i` to every sentence
    pub fn row(&self, i: usize) -> &[f64] {
        if i >= self.size {
            return &[];
        }
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Sum of row `i` without the diagonal entry
    pub fn centrality(&self, i: usize) -> f64 {
        self.row(i)
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &sim)| sim)
            .sum()
    }

    /// Centrality of every sentence, indexed by sentence position
    pub fn centrality_scores(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.centrality(i)).collect()
    }
}

fn word_sets(sentences: &[Sentence]) -> Vec<WordSet<'_>> {
    sentences
        .iter()
        .map(|s| WordSet::from_sentence(&s.raw))
        .collect()
}

#[inline]
fn fill_row<M: SimilarityMeasure>(
    row: &mut [f64],
    current: &WordSet<'_>,
    word_sets: &[WordSet<'_>],
    measure: &M,
) {
    for (cell, other) in row.iter_mut().zip(word_sets) {
        *cell = measure.similarity(current, other);
    }
}
