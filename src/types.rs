//! Core data types
//!
//! Shared by the segmenter, ranker and selector stages.

use crate::errors::{DigestError, Result};
use crate::nlp::normalize::normalize;
use serde::{Deserialize, Serialize};

/// Sentence count from which similarity rows are computed in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// A sentence of the document
///
/// `raw` keeps the original spacing and punctuation and is what ends up in a
/// summary. `normalized` is the lookup key used by the score map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position in the document-wide sentence list
    pub index: usize,
    /// Text as segmented
    pub raw: String,
    /// Text with every non-word character removed
    pub normalized: String,
}

impl Sentence {
    /// Create a sentence, deriving its normalized form
    pub fn new(index: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self {
            index,
            raw,
            normalized,
        }
    }

    /// Whether the sentence normalizes to nothing (blank or punctuation only)
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Summarizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Sentence count at which the similarity matrix is built with rayon
    pub parallel_threshold: usize,
    /// Paragraphs with fewer than two sentences contribute nothing
    pub skip_single_sentence_paragraphs: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            skip_single_sentence_paragraphs: true,
        }
    }
}

impl SummarizerConfig {
    /// Set the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Set whether single-sentence paragraphs are skipped
    pub fn with_skip_single_sentence_paragraphs(mut self, skip: bool) -> Self {
        self.skip_single_sentence_paragraphs = skip;
        self
    }

    /// Parse a JSON document and validate the result
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(DigestError::InvalidConfig {
                field: "parallel_threshold",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
