//! Error types for Tally
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Tally
#[derive(Debug, Error)]
pub enum TallyError {
    /// Lookup, mutation or delete target is absent or out of range
    #[error("Not found: {0}")]
    NotFound(String),

    /// User-supplied value could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Refused to overwrite a data file that failed to load
    #[error("Refusing to overwrite {path}: {reason}")]
    Refused { path: String, reason: String },

    /// Persisted file is truncated or corrupt
    #[error("Malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TallyError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Whether this is a normal "target absent" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = TallyError::NotFound("student 7".to_string());
        assert_eq!(err.to_string(), "Not found: student 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_error() {
        let err = TallyError::malformed(4, "expected grade count");
        assert_eq!(err.to_string(), "Malformed input at line 4: expected grade count");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_input_error() {
        let err = TallyError::InvalidInput("position 'two'".to_string());
        assert_eq!(err.to_string(), "Invalid input: position 'two'");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_refused_error() {
        let err = TallyError::Refused {
            path: "tasks.txt".to_string(),
            reason: "bad flag".to_string(),
        };
        assert_eq!(err.to_string(), "Refusing to overwrite tasks.txt: bad flag");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TallyError = io_err.into();
        assert!(matches!(err, TallyError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TallyError = json_err.into();
        assert!(matches!(err, TallyError::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TallyError::NotFound("task 3".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
