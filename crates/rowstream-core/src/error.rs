//! Stream error types.
//!
//! End-of-stream is deliberately not an error: reads return a
//! [`ReadOutcome`](crate::reader::ReadOutcome) that can carry bytes and the
//! end marker together, so callers cannot accidentally discard already-read
//! bytes when end-of-stream fires.

use thiserror::Error;

use rowstream_store::StoreError;

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur during stream operations.
#[derive(Debug, Error)]
#[allow(missing_docs)] // Fields are documented by variant docs
pub enum StreamError {
    /// Stream creation attempted on an existing stream name.
    #[error("stream already exists: {stream}")]
    AlreadyExists { stream: String },

    /// Stream missing for open or drop.
    #[error("stream not found: {stream}")]
    NotFound { stream: String },

    /// Operation on a closed writer or reader session.
    #[error("stream session is closed ({operation})")]
    Closed { operation: &'static str },

    /// Invalid stream configuration.
    #[error("invalid stream configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Row store failure, passed through with stream and operation context.
    #[error("row store failure on stream {stream} during {operation}: {source}")]
    Store {
        stream: String,
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl StreamError {
    /// Creates an already-exists error.
    pub fn already_exists(stream: impl Into<String>) -> Self {
        Self::AlreadyExists {
            stream: stream.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(stream: impl Into<String>) -> Self {
        Self::NotFound {
            stream: stream.into(),
        }
    }

    /// Creates a closed-session error.
    pub fn closed(operation: &'static str) -> Self {
        Self::Closed { operation }
    }

    /// Creates a config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Wraps a store failure with stream and operation context.
    pub fn store(stream: impl Into<String>, operation: &'static str, source: StoreError) -> Self {
        Self::Store {
            stream: stream.into(),
            operation,
            source,
        }
    }

    /// Returns true if this is an already-exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a closed-session error.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }

    /// Returns true if this wraps an underlying row store failure.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_predicates() {
        assert!(StreamError::already_exists("s").is_already_exists());
        assert!(StreamError::not_found("s").is_not_found());
        assert!(StreamError::closed("append").is_closed());
        assert!(StreamError::store("s", "insert", StoreError::connection("down")).is_store());
    }

    #[test]
    fn test_store_error_keeps_cause() {
        let err = StreamError::store("weights", "insert", StoreError::connection("down"));
        let msg = err.to_string();
        assert!(msg.contains("weights"));
        assert!(msg.contains("insert"));
        // The original cause stays reachable through the source chain.
        assert!(err.source().unwrap().to_string().contains("down"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StreamError::not_found("weights").to_string(),
            "stream not found: weights"
        );
        assert_eq!(
            StreamError::closed("read").to_string(),
            "stream session is closed (read)"
        );
    }
}
