//! Stream table management.
//!
//! A stream is backed 1:1 by a physical table under the same name. The
//! table manager holds nothing beyond the store handle; creating,
//! dropping, and probing streams are thin, idempotent-failure wrappers
//! around the adapter.

use tracing::debug;

use rowstream_store::RowStore;

use crate::error::{StreamError, StreamResult};

/// Maps stream names to physical tables and manages their lifecycle.
pub struct TableManager<'a> {
    store: &'a dyn RowStore,
}

impl<'a> TableManager<'a> {
    /// Creates a manager over a row store.
    pub fn new(store: &'a dyn RowStore) -> Self {
        Self { store }
    }

    /// Checks whether a stream exists. Pure read, no side effect.
    pub fn exists(&self, stream: &str) -> StreamResult<bool> {
        self.store
            .table_exists(stream)
            .map_err(|e| StreamError::store(stream, "exists", e))
    }

    /// Creates the backing table for a new stream.
    ///
    /// Fails with `AlreadyExists` if the stream is already present; the
    /// existing table is left untouched.
    pub fn create(&self, stream: &str) -> StreamResult<()> {
        self.store.create_table(stream).map_err(|e| {
            if e.is_table_exists() {
                StreamError::already_exists(stream)
            } else {
                StreamError::store(stream, "create", e)
            }
        })?;
        debug!(stream, "stream table created");
        Ok(())
    }

    /// Drops a stream and all its blocks.
    ///
    /// Fails with `NotFound` if the stream is absent.
    pub fn drop_stream(&self, stream: &str) -> StreamResult<()> {
        self.store.drop_table(stream).map_err(|e| {
            if e.is_table_not_found() {
                StreamError::not_found(stream)
            } else {
                StreamError::store(stream, "drop", e)
            }
        })?;
        debug!(stream, "stream table dropped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowstream_store::MemoryRowStore;

    #[test]
    fn test_create_exists_drop() {
        let store = MemoryRowStore::new();
        let manager = TableManager::new(&store);

        assert!(!manager.exists("s").unwrap());
        manager.create("s").unwrap();
        assert!(manager.exists("s").unwrap());
        manager.drop_stream("s").unwrap();
        assert!(!manager.exists("s").unwrap());
    }

    #[test]
    fn test_create_existing_fails_already_exists() {
        let store = MemoryRowStore::new();
        let manager = TableManager::new(&store);

        manager.create("s").unwrap();
        assert!(manager.create("s").unwrap_err().is_already_exists());
        // The original table survives the failed create.
        assert!(manager.exists("s").unwrap());
    }

    #[test]
    fn test_drop_missing_fails_not_found() {
        let store = MemoryRowStore::new();
        let manager = TableManager::new(&store);

        assert!(manager.drop_stream("s").unwrap_err().is_not_found());

        manager.create("s").unwrap();
        manager.drop_stream("s").unwrap();
        assert!(manager.drop_stream("s").unwrap_err().is_not_found());
    }
}
