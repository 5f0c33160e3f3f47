//! Shared error types for assessment operations

use thiserror::Error;

/// Main error type for loomprint operations
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Out-of-range or non-positive numeric input. Surfaced synchronously;
    /// retrying a pure function with the same bad input cannot succeed.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A category key has no registry entry. Never defaulted to a zero
    /// contribution: a silent zero would present a data-entry mistake as a
    /// low-carbon result.
    #[error("Unknown {category} key: {key:?}")]
    UnknownKey { category: String, key: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl EstimateError {
    /// Create an invalid-input error with a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown-key error for a registry category.
    pub fn unknown_key(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            category: category.into(),
            key: key.into(),
        }
    }

    /// Whether this error came from input validation rather than lookup.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether this error is a missing registry key.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_formats_message() {
        let err = EstimateError::invalid_input("quantity must be positive");
        assert_eq!(err.to_string(), "Invalid input: quantity must be positive");
        assert!(err.is_invalid_input());
        assert!(!err.is_unknown_key());
    }

    #[test]
    fn unknown_key_names_category_and_key() {
        let err = EstimateError::unknown_key("material", "unobtainium");
        assert_eq!(err.to_string(), "Unknown material key: \"unobtainium\"");
        assert!(err.is_unknown_key());
    }
}
