//! SQL statement adapter over an opaque executor.
//!
//! [`SqlRowStore`] turns the [`RowStore`] contract into the three SQL
//! statements a stream table needs: create, ordered scan, drop (plus the
//! insert). The connection layer stays behind the [`SqlExecutor`] seam;
//! this module never opens sockets or speaks a wire protocol.

use bytes::Bytes;

use rowstream_common::SeqId;

use crate::error::{StoreError, StoreResult};
use crate::store::{Row, RowCursor, RowStore};

/// Physical schema: auto-assigned integer key + variable-length binary block.
pub fn create_table_stmt(table: &str) -> String {
    format!("CREATE TABLE {table} (id INT AUTO_INCREMENT, block BLOB, PRIMARY KEY (id))")
}

/// Inserts one block; the single `?` placeholder binds the payload.
pub fn insert_block_stmt(table: &str) -> String {
    format!("INSERT INTO {table} (block) VALUES(?)")
}

/// Scans all blocks in key order. Key order is write order.
pub fn select_blocks_stmt(table: &str) -> String {
    format!("SELECT id, block FROM {table} ORDER BY id")
}

/// Drops the stream table.
pub fn drop_table_stmt(table: &str) -> String {
    format!("DROP TABLE {table}")
}

/// Opaque statement executor a database driver implements.
///
/// Cancellation, timeouts, and retries all live behind this seam; errors it
/// returns are propagated to callers unchanged.
pub trait SqlExecutor: Send + Sync {
    /// Runs a statement that returns no rows.
    fn execute(&self, sql: &str) -> StoreResult<()>;

    /// Runs an insert with one bound binary argument, returning the key the
    /// store assigned to the new row.
    fn insert(&self, sql: &str, payload: &[u8]) -> StoreResult<u64>;

    /// Runs a query returning `(key, payload)` rows in statement order.
    ///
    /// The iterator may consume the result set incrementally; it does not
    /// have to materialize all rows up front.
    fn query(&self, sql: &str) -> StoreResult<SqlRows>;

    /// Checks the store's catalog for a table.
    fn table_exists(&self, table: &str) -> StoreResult<bool>;
}

/// Incremental result set produced by [`SqlExecutor::query`].
pub type SqlRows = Box<dyn Iterator<Item = StoreResult<(u64, Bytes)>> + Send>;

/// [`RowStore`] implementation over any [`SqlExecutor`].
#[derive(Debug)]
pub struct SqlRowStore<E> {
    executor: E,
}

impl<E: SqlExecutor> SqlRowStore<E> {
    /// Wraps an executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Returns the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }
}

impl<E: SqlExecutor> RowStore for SqlRowStore<E> {
    fn table_exists(&self, table: &str) -> StoreResult<bool> {
        self.executor.table_exists(table)
    }

    fn create_table(&self, table: &str) -> StoreResult<()> {
        if self.executor.table_exists(table)? {
            return Err(StoreError::table_exists(table));
        }
        self.executor.execute(&create_table_stmt(table))
    }

    fn drop_table(&self, table: &str) -> StoreResult<()> {
        if !self.executor.table_exists(table)? {
            return Err(StoreError::table_not_found(table));
        }
        self.executor.execute(&drop_table_stmt(table))
    }

    fn insert_row(&self, table: &str, payload: &[u8]) -> StoreResult<SeqId> {
        let key = self.executor.insert(&insert_block_stmt(table), payload)?;
        Ok(SeqId::new(key))
    }

    fn scan(&self, table: &str) -> StoreResult<Box<dyn RowCursor>> {
        if !self.executor.table_exists(table)? {
            return Err(StoreError::table_not_found(table));
        }
        let rows = self.executor.query(&select_blocks_stmt(table))?;
        Ok(Box::new(SqlCursor { rows }))
    }
}

/// Cursor draining an executor result set.
struct SqlCursor {
    rows: SqlRows,
}

impl RowCursor for SqlCursor {
    fn next_row(&mut self) -> StoreResult<Option<Row>> {
        match self.rows.next() {
            Some(Ok((key, payload))) => Ok(Some(Row::new(SeqId::new(key), payload))),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}
