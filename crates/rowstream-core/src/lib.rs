//! # rowstream-core
//!
//! Chunked stream codec over a row store.
//!
//! RowStream lets an application treat a row-oriented table as a
//! sequential byte stream: the writer splits appended bytes into
//! fixed-size blocks and commits each block as one ordered row; the reader
//! reconstructs the byte sequence from those rows behind a buffered pull
//! interface with lazy end-of-stream detection. Large serialized artifacts
//! can thereby live inside an existing relational database with no
//! separate object store.
//!
//! # Architecture
//!
//! ```text
//! caller bytes ──> StreamWriter ──> ordered rows ──> StreamReader ──> caller bytes
//!                       │          (RowStore)             │
//!                       └────── TableManager ─────────────┘
//!                        (create / exists / drop)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use rowstream_core::{create, open, drop_stream, StreamConfig};
//! use rowstream_store::{MemoryRowStore, RowStore};
//!
//! # fn main() -> rowstream_core::StreamResult<()> {
//! let store: Arc<dyn RowStore> = Arc::new(MemoryRowStore::new());
//! let config = StreamConfig::new().with_block_size(8);
//!
//! let mut writer = create(Arc::clone(&store), "weights", config)?;
//! writer.append(b"AAAAAAAAABBB")?;
//! writer.close()?;
//!
//! let mut reader = open(Arc::clone(&store), "weights", config)?;
//! let mut buf = [0u8; 16];
//! let outcome = reader.read(&mut buf)?;
//! assert_eq!(&buf[..outcome.bytes], b"AAAAAAAAABBB");
//! assert!(outcome.is_end_of_stream());
//! reader.close()?;
//!
//! drop_stream(store.as_ref(), "weights")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;

/// Stream table lifecycle management.
pub mod table;

/// Stream writer (chunking and block commit).
pub mod writer;

/// Stream reader (buffered pull with lazy end-of-stream).
pub mod reader;

use std::sync::Arc;

use rowstream_store::RowStore;

// Re-exports for convenience
pub use config::StreamConfig;
pub use error::{StreamError, StreamResult};
pub use reader::{ReadOutcome, ReadStatus, StreamReader};
pub use table::TableManager;
pub use writer::StreamWriter;

/// Creates a new stream and returns an open writer for it.
///
/// Fails with [`StreamError::AlreadyExists`] if the name is taken.
pub fn create(
    store: Arc<dyn RowStore>,
    stream: impl Into<String>,
    config: StreamConfig,
) -> StreamResult<StreamWriter> {
    StreamWriter::create(store, stream, config)
}

/// Opens a reader over an existing stream.
///
/// Fails with [`StreamError::NotFound`] if the stream does not exist.
pub fn open(
    store: Arc<dyn RowStore>,
    stream: impl Into<String>,
    config: StreamConfig,
) -> StreamResult<StreamReader> {
    StreamReader::open(store, stream, config)
}

/// Checks whether a stream exists.
pub fn exists(store: &dyn RowStore, stream: &str) -> StreamResult<bool> {
    TableManager::new(store).exists(stream)
}

/// Drops a stream and all its blocks.
///
/// Fails with [`StreamError::NotFound`] if the stream is absent.
pub fn drop_stream(store: &dyn RowStore, stream: &str) -> StreamResult<()> {
    TableManager::new(store).drop_stream(stream)
}
