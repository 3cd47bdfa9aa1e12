//! Error surface of the scoring pipeline

use std::fmt;

/// Errors surfaced by the scoring pipeline and the classifier seam.
///
/// The pipeline is the single boundary that converts every internal fault
/// into one of these values; nothing below it reports errors to callers
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The caller supplied a feature vector of the wrong length.
    InvalidLength { expected: usize, actual: usize },
    /// The underlying classifier call failed.
    Inference(String),
    /// Any other unexpected fault during scoring.
    Internal(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "expected {} features, got {}", expected, actual)
            }
            Self::Inference(msg) => write!(f, "inference error: {}", msg),
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message_carries_expected_count() {
        let err = ScoreError::InvalidLength {
            expected: 8,
            actual: 5,
        };
        assert_eq!(err.to_string(), "expected 8 features, got 5");
    }

    #[test]
    fn test_internal_wraps_description() {
        let err = ScoreError::Internal("prediction failed: model exploded".to_string());
        assert!(err.to_string().contains("model exploded"));
    }
}
