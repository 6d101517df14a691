//! Error types for the classifier and its configuration.
//!
//! Short sequences are not errors: a detector that lacks data simply reports
//! "not detected". These types cover input that cannot be analyzed at all.

use std::path::PathBuf;

/// Input that cannot be turned into an encoded sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// No symbols were supplied.
    #[error("symbol sequence is empty")]
    EmptySequence,
    /// A wire value that is not an integer or a string.
    #[error("symbol at index {index} is not a discrete value (found {found})")]
    UnsupportedSymbol { index: usize, found: String },
    /// Identity encoding was requested but the symbol is text.
    #[error("symbol at index {index} is not an integer; identity encoding needs numeric symbols")]
    NonNumericSymbol { index: usize },
}

/// Failure to load or validate a [`ClassifierConfig`](crate::ClassifierConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_index() {
        let err = ClassifyError::UnsupportedSymbol {
            index: 3,
            found: "1.5".into(),
        };
        assert_eq!(
            err.to_string(),
            "symbol at index 3 is not a discrete value (found 1.5)"
        );
        let err = ClassifyError::NonNumericSymbol { index: 0 };
        assert!(err.to_string().contains("index 0"));
    }
}
