//! # rapid_digest
//!
//! Extractive summarization by sentence centrality.
//!
//! Every sentence of a document is compared with every other by word
//! overlap; a sentence's centrality is the sum of those similarities. The
//! summary keeps, for each paragraph, its most central sentence.
//!
//! ```
//! let text = "Rust is fast. Rust is safe. Cats sleep.\n\nBirds fly. Rust is fun.";
//! let summary = rapid_digest::summarize(Some("Notes"), text);
//! assert_eq!(summary, "Notes\nRust is fast\nRust is fun.\n");
//! ```
//!
//! ## Features
//!
//! - **Deterministic**: no model, no randomness, same input gives the same summary
//! - **Parallel**: large documents build the similarity matrix with rayon
//! - **Pluggable**: the similarity measure sits behind [`SimilarityMeasure`]

pub mod centrality;
pub mod errors;
pub mod graph;
pub mod input;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{DigestError, Result};
pub use types::{Sentence, SummarizerConfig};

// Re-export main functionality
pub use centrality::{rank, CentralityResult, ScoreMap};
pub use graph::{matrix::SimilarityMatrix, overlap::WordSet};
pub use input::{read_document, Document};
pub use nlp::{
    normalize::normalize,
    segmenter::{split_paragraphs, split_sentences},
};
pub use pipeline::{NoopObserver, SimilarityMeasure, SummaryPipeline, WordOverlap};
pub use summarizer::{
    selector::{select_summary, ParagraphSelector},
    summary::{Summary, SummaryStats},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text`, prefixing the trimmed `title` when one is given
///
/// Returns one line per paragraph that has a sentence sharing words with
/// the rest of the document, every line terminated by `'\n'`.
pub fn summarize(title: Option<&str>, text: &str) -> String {
    SummaryPipeline::new()
        .run(title, text, &mut NoopObserver)
        .render()
}
