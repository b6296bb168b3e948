//! Error types
//!
//! The summarization core is total and never returns an error. These
//! variants cover the layer around it: reading documents and loading
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the pure summarization core
#[derive(Debug, Error)]
pub enum DigestError {
    /// The input document could not be read
    #[error("file '{}' could not be opened: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range
    #[error("invalid configuration for `{field}`: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_names_file() {
        let err = DigestError::Input {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("could not be opened"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = DigestError::InvalidConfig {
            field: "parallel_threshold",
            message: "must be at least 1".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid configuration for `parallel_threshold`: must be at least 1"
        );
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DigestError = parse_err.into();
        assert!(matches!(err, DigestError::Json(_)));
    }
}
