//! Summarization components
//!
//! Provides per-paragraph sentence selection and the summary output types.

pub mod selector;
pub mod summary;
