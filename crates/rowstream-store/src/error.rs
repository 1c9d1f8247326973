//! Row store error types.

use thiserror::Error;

/// Result type for row store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur inside a row store backend.
#[derive(Debug, Error)]
#[allow(missing_docs)] // Fields are documented by variant docs
pub enum StoreError {
    /// Table creation attempted on an existing table.
    #[error("table already exists: {table}")]
    TableExists { table: String },

    /// Table missing for an operation that requires it.
    #[error("table not found: {table}")]
    TableNotFound { table: String },

    /// Connection or transport failure talking to the store.
    #[error("row store connection failed: {reason}")]
    Connection { reason: String },

    /// Statement execution failure (syntax, constraint violation, ...).
    #[error("statement execution failed: {reason}")]
    Execution { reason: String },

    /// Row data that the store returned could not be interpreted.
    #[error("corrupt row data in {table}: {reason}")]
    Corrupt { table: String, reason: String },
}

impl StoreError {
    /// Creates a table-exists error.
    pub fn table_exists(table: impl Into<String>) -> Self {
        Self::TableExists {
            table: table.into(),
        }
    }

    /// Creates a table-not-found error.
    pub fn table_not_found(table: impl Into<String>) -> Self {
        Self::TableNotFound {
            table: table.into(),
        }
    }

    /// Creates a connection error.
    pub fn connection(reason: impl Into<String>) -> Self {
        Self::Connection {
            reason: reason.into(),
        }
    }

    /// Creates an execution error.
    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution {
            reason: reason.into(),
        }
    }

    /// Creates a corrupt-row error.
    pub fn corrupt(table: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error means the target table already exists.
    pub fn is_table_exists(&self) -> bool {
        matches!(self, Self::TableExists { .. })
    }

    /// Returns true if this error means the target table is absent.
    pub fn is_table_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        let err = StoreError::table_exists("blobs");
        assert!(err.is_table_exists());
        assert!(!err.is_table_not_found());

        let err = StoreError::table_not_found("blobs");
        assert!(err.is_table_not_found());
        assert!(!err.is_table_exists());
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::table_not_found("model_weights");
        assert_eq!(err.to_string(), "table not found: model_weights");

        let err = StoreError::connection("timed out");
        assert!(err.to_string().contains("timed out"));
    }
}
