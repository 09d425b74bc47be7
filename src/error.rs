//! Error types for stream operations.

use thiserror::Error;

/// Errors surfaced by consumers, converters and the operations that drive them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A consumer refused to accept an element
    #[error("Element rejected: {0}")]
    Rejected(String),

    /// A converter could not convert an element
    #[error("Conversion failed: {0}")]
    Conversion(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl StreamError {
    /// Shorthand for [`StreamError::Rejected`].
    pub fn rejected(msg: impl Into<String>) -> Self {
        StreamError::Rejected(msg.into())
    }

    /// Shorthand for [`StreamError::Conversion`].
    pub fn conversion(msg: impl Into<String>) -> Self {
        StreamError::Conversion(msg.into())
    }
}

impl From<String> for StreamError {
    fn from(msg: String) -> Self {
        StreamError::Other(msg)
    }
}

impl From<&str> for StreamError {
    fn from(msg: &str) -> Self {
        StreamError::Other(msg.to_string())
    }
}

/// Result type alias for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StreamError::rejected("odd").to_string(),
            "Element rejected: odd"
        );
        assert_eq!(
            StreamError::conversion("not a number").to_string(),
            "Conversion failed: not a number"
        );
        assert_eq!(StreamError::from("boom").to_string(), "boom");
    }

    #[test]
    fn test_error_from_string() {
        let err: StreamError = String::from("oops").into();
        assert_eq!(err, StreamError::Other("oops".to_string()));
    }
}
