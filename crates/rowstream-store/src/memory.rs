//! In-memory reference backend.
//!
//! `MemoryRowStore` keeps every table as an append-only `Vec<Bytes>` under
//! a `parking_lot` lock. It exists for tests and for embedding RowStream
//! without a database, and it exercises the same error contract as a real
//! backend.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use rowstream_common::SeqId;

use crate::error::{StoreError, StoreResult};
use crate::store::{Row, RowCursor, RowStore};

type TableMap = HashMap<String, Vec<Bytes>>;

/// In-process row store backed by a table map.
///
/// Rows are only ever appended, so a cursor can address them by index and
/// stay valid across concurrent inserts. Dropping a table invalidates its
/// open cursors; their next fetch fails with `TableNotFound`.
#[derive(Debug, Default, Clone)]
pub struct MemoryRowStore {
    tables: Arc<RwLock<TableMap>>,
}

impl MemoryRowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rows currently committed to a table.
    pub fn row_count(&self, table: &str) -> StoreResult<usize> {
        let tables = self.tables.read();
        tables
            .get(table)
            .map(Vec::len)
            .ok_or_else(|| StoreError::table_not_found(table))
    }
}

impl RowStore for MemoryRowStore {
    fn table_exists(&self, table: &str) -> StoreResult<bool> {
        Ok(self.tables.read().contains_key(table))
    }

    fn create_table(&self, table: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        if tables.contains_key(table) {
            return Err(StoreError::table_exists(table));
        }
        tables.insert(table.to_owned(), Vec::new());
        Ok(())
    }

    fn drop_table(&self, table: &str) -> StoreResult<()> {
        let mut tables = self.tables.write();
        if tables.remove(table).is_none() {
            return Err(StoreError::table_not_found(table));
        }
        Ok(())
    }

    fn insert_row(&self, table: &str, payload: &[u8]) -> StoreResult<SeqId> {
        let mut tables = self.tables.write();
        let rows = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::table_not_found(table))?;
        rows.push(Bytes::copy_from_slice(payload));
        Ok(SeqId::new(rows.len() as u64))
    }

    fn scan(&self, table: &str) -> StoreResult<Box<dyn RowCursor>> {
        if !self.tables.read().contains_key(table) {
            return Err(StoreError::table_not_found(table));
        }
        Ok(Box::new(MemoryCursor {
            tables: Arc::clone(&self.tables),
            table: table.to_owned(),
            next_index: 0,
        }))
    }
}

/// Index-based cursor over one in-memory table.
struct MemoryCursor {
    tables: Arc<RwLock<TableMap>>,
    table: String,
    next_index: usize,
}

impl RowCursor for MemoryCursor {
    fn next_row(&mut self) -> StoreResult<Option<Row>> {
        let tables = self.tables.read();
        let rows = tables
            .get(&self.table)
            .ok_or_else(|| StoreError::table_not_found(&self.table))?;
        match rows.get(self.next_index) {
            Some(payload) => {
                self.next_index += 1;
                Ok(Some(Row::new(
                    SeqId::new(self.next_index as u64),
                    payload.clone(),
                )))
            }
            None => Ok(None),
        }
    }
}
