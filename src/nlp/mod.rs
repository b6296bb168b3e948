//! Natural Language Processing components
//!
//! This module provides sentence/paragraph segmentation and sentence
//! normalization.

pub mod normalize;
pub mod segmenter;
