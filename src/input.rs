//! Document loading
//!
//! Reads a document from disk as text. Invalid UTF-8 is replaced rather
//! than rejected, since the summarizer only needs word boundaries. The
//! on-disk byte count is kept separately because replacement changes the
//! text length.

use crate::errors::{DigestError, Result};
use std::path::Path;

/// A document read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Decoded text, with invalid sequences replaced by U+FFFD
    pub text: String,
    /// Size of the file in bytes, before decoding
    pub byte_len: usize,
}

/// Read the document at `path`
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DigestError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    let byte_len = bytes.len();

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    Ok(Document { text, byte_len })
}
