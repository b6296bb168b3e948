//! Stage trait definitions for the pipeline.
//!
//! The similarity measure is the one pluggable seam of the ranking stage.
//! Implementations are statically dispatched; trait objects work too as long
//! as the measure is `Sync`, which parallel matrix construction requires.

use crate::graph::overlap::{overlap_similarity, WordSet};

// ============================================================================
// SimilarityMeasure — pairwise sentence comparison (rank stage)
// ============================================================================

/// Pairwise similarity between two sentences' word sets.
///
/// # Contract
///
/// - **Symmetric**: `similarity(a, b) == similarity(b, a)`.
/// - **Non-negative**: centrality sums assume no negative contributions.
/// - **Pure**: the matrix may evaluate pairs in any order, on any thread.
pub trait SimilarityMeasure: Sync {
    /// Similarity of `a` and `b`.
    fn similarity(&self, a: &WordSet<'_>, b: &WordSet<'_>) -> f64;
}

/// Intersection size over mean set size — the default measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordOverlap;

impl SimilarityMeasure for WordOverlap {
    #[inline]
    fn similarity(&self, a: &WordSet<'_>, b: &WordSet<'_>) -> f64 {
        overlap_similarity(a, b)
    }
}

impl<M: SimilarityMeasure + ?Sized> SimilarityMeasure for &M {
    #[inline]
    fn similarity(&self, a: &WordSet<'_>, b: &WordSet<'_>) -> f64 {
        (**self).similarity(a, b)
    }
}

impl<M: SimilarityMeasure + ?Sized> SimilarityMeasure for Box<M> {
    #[inline]
    fn similarity(&self, a: &WordSet<'_>, b: &WordSet<'_>) -> f64 {
        (**self).similarity(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_overlap_matches_free_function() {
        let a = WordSet::from_sentence("graph based ranking");
        let b = WordSet::from_sentence("ranking graph nodes");

        assert_eq!(WordOverlap.similarity(&a, &b), overlap_similarity(&a, &b));
    }

    #[test]
    fn test_measure_as_trait_object() {
        let measure: Box<dyn SimilarityMeasure> = Box::new(WordOverlap);
        let a = WordSet::from_sentence("x y");
        let b = WordSet::from_sentence("y z");

        assert!((measure.similarity(&a, &b) - 0.5).abs() < 1e-10);
    }

    /// A custom measure can replace word overlap.
    #[test]
    fn test_custom_measure() {
        struct SharedWordCount;

        impl SimilarityMeasure for SharedWordCount {
            fn similarity(&self, a: &WordSet<'_>, b: &WordSet<'_>) -> f64 {
                a.intersection_len(b) as f64
            }
        }

        let a = WordSet::from_sentence("one two three");
        let b = WordSet::from_sentence("two three four");

        assert_eq!(SharedWordCount.similarity(&a, &b), 2.0);
    }
}
