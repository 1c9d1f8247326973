//! Shared helpers for RowStream integration tests.

use std::sync::Arc;

use rand::Rng;

use rowstream_core::StreamConfig;
use rowstream_store::{MemoryRowStore, RowStore};

/// Creates a fresh in-memory row store.
pub fn memory_store() -> (Arc<MemoryRowStore>, Arc<dyn RowStore>) {
    let store = Arc::new(MemoryRowStore::new());
    let dyn_store: Arc<dyn RowStore> = Arc::clone(&store) as Arc<dyn RowStore>;
    (store, dyn_store)
}

/// Small block size so tests cross block boundaries constantly.
pub fn small_config() -> StreamConfig {
    StreamConfig::new().with_block_size(8)
}

/// Generates a unique stream name, mirroring per-test table isolation.
pub fn unique_stream(prefix: &str) -> String {
    let nonce: u64 = rand::thread_rng().gen();
    format!("{prefix}_{nonce}")
}
