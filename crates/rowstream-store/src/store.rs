//! Core adapter traits and row types.
//!
//! A [`RowStore`] models the backing database as an ordered-row table
//! service. Implementations must be thread-safe (`Send + Sync`) so that
//! independent reader sessions can scan the same store concurrently.

use bytes::Bytes;

use rowstream_common::SeqId;

use crate::error::StoreResult;

/// One committed block row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Store-assigned sequence key; ascending key order is write order.
    pub seq: SeqId,
    /// Opaque block payload.
    pub payload: Bytes,
}

impl Row {
    /// Creates a row from a sequence key and payload.
    pub fn new(seq: SeqId, payload: impl Into<Bytes>) -> Self {
        Self {
            seq,
            payload: payload.into(),
        }
    }
}

/// Incremental cursor over the rows of one table, in ascending key order.
///
/// Cursors are pull-based: nothing is fetched until [`next_row`] is called,
/// and a cursor never restarts within a session. Each reader session owns
/// its own cursor.
///
/// [`next_row`]: RowCursor::next_row
pub trait RowCursor: Send {
    /// Fetches the next row.
    ///
    /// Returns `Ok(None)` once the scan is exhausted. Exhaustion is final
    /// for this cursor: later calls keep returning `Ok(None)`.
    fn next_row(&mut self) -> StoreResult<Option<Row>>;
}

/// Trait for row store backend implementations.
///
/// ## Error Handling
///
/// Implementations should:
/// - Return `TableExists` from [`create_table`] when the table is present
/// - Return `TableNotFound` from [`drop_table`] and [`scan`] when absent
/// - Return `Connection`/`Execution` for underlying store failures
///
/// Retry policy is the backend's concern; callers never retry.
///
/// [`create_table`]: RowStore::create_table
/// [`drop_table`]: RowStore::drop_table
/// [`scan`]: RowStore::scan
pub trait RowStore: Send + Sync {
    /// Checks whether a table exists. Pure read, no side effect.
    fn table_exists(&self, table: &str) -> StoreResult<bool>;

    /// Creates a table with schema {auto-assigned sequence key, binary payload}.
    ///
    /// Fails with `TableExists` if the table is already present.
    fn create_table(&self, table: &str) -> StoreResult<()>;

    /// Deletes a table and all its rows.
    ///
    /// Fails with `TableNotFound` if the table is absent.
    fn drop_table(&self, table: &str) -> StoreResult<()>;

    /// Appends one row; the store assigns and returns its sequence key.
    ///
    /// Each insert is atomic at the store level: a crash mid-write leaves
    /// the table truncated at the last committed row, never a partial one.
    fn insert_row(&self, table: &str, payload: &[u8]) -> StoreResult<SeqId>;

    /// Opens a cursor over the table's rows in ascending key order.
    ///
    /// Fails with `TableNotFound` if the table is absent.
    fn scan(&self, table: &str) -> StoreResult<Box<dyn RowCursor>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_construction() {
        let row = Row::new(SeqId::new(3), &b"abc"[..]);
        assert_eq!(row.seq.as_u64(), 3);
        assert_eq!(&row.payload[..], b"abc");
    }
}
