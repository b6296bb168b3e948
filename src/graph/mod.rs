//! Sentence similarity graph
//!
//! This module provides the word-overlap measure and the dense pairwise
//! similarity matrix it fills.

pub mod matrix;
pub mod overlap;
