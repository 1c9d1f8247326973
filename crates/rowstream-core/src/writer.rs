//! Stream writer: accumulates bytes into fixed-size blocks and commits
//! each completed block as one row.
//!
//! The accumulation buffer never holds a full block for long: whenever it
//! reaches the configured block size, leading blocks are sliced off and
//! inserted immediately, so at most one partially-filled block exists at
//! any instant. `close` flushes the trailing partial block; a stream on
//! which nothing was appended commits zero rows.

use std::io;
use std::sync::Arc;

use bytes::BytesMut;
use tracing::{debug, trace, warn};

use rowstream_store::RowStore;

use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};
use crate::table::TableManager;

/// Writer session for a new stream.
///
/// State machine: `Open -> Closed`, one-way. Appends after close fail with
/// [`StreamError::Closed`]; a second close is a no-op.
pub struct StreamWriter {
    store: Arc<dyn RowStore>,
    stream: String,
    block_size: usize,
    buf: BytesMut,
    blocks_written: u64,
    closed: bool,
}

impl StreamWriter {
    /// Creates a new stream and returns an open writer for it.
    ///
    /// Fails with `AlreadyExists` if the stream name is taken.
    pub fn create(
        store: Arc<dyn RowStore>,
        stream: impl Into<String>,
        config: StreamConfig,
    ) -> StreamResult<Self> {
        config.validate().map_err(StreamError::invalid_config)?;
        let stream = stream.into();
        TableManager::new(store.as_ref()).create(&stream)?;
        debug!(stream = %stream, block_size = config.block_size, "stream writer opened");
        Ok(Self {
            store,
            stream,
            block_size: config.block_size,
            buf: BytesMut::with_capacity(config.block_size),
            blocks_written: 0,
            closed: false,
        })
    }

    /// Appends bytes to the stream.
    ///
    /// Every completed block is committed before this call returns; any
    /// tail below the block size stays buffered. On success the whole
    /// input is accepted, so the returned count equals `bytes.len()` -
    /// there are no short writes without an error.
    pub fn append(&mut self, bytes: &[u8]) -> StreamResult<usize> {
        if self.closed {
            return Err(StreamError::closed("append"));
        }
        self.buf.extend_from_slice(bytes);
        while self.buf.len() >= self.block_size {
            let block = self.buf.split_to(self.block_size);
            self.commit_block(&block)?;
        }
        Ok(bytes.len())
    }

    /// Closes the writer, flushing the trailing partial block if any.
    ///
    /// A stream on which nothing was ever appended ends up with zero rows.
    /// Closing an already-closed writer is a no-op. If the final flush
    /// fails the writer stays open so the close can be retried.
    pub fn close(&mut self) -> StreamResult<()> {
        if self.closed {
            return Ok(());
        }
        if !self.buf.is_empty() {
            let block = self.buf.split();
            self.commit_block(&block)?;
        }
        self.closed = true;
        debug!(
            stream = %self.stream,
            blocks = self.blocks_written,
            "stream writer closed"
        );
        Ok(())
    }

    /// Returns the stream name.
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// Returns true once the writer is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of bytes buffered but not yet committed.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of block rows committed so far.
    pub fn blocks_written(&self) -> u64 {
        self.blocks_written
    }

    fn commit_block(&mut self, block: &[u8]) -> StreamResult<()> {
        let seq = self
            .store
            .insert_row(&self.stream, block)
            .map_err(|e| StreamError::store(&self.stream, "insert", e))?;
        self.blocks_written += 1;
        trace!(stream = %self.stream, %seq, len = block.len(), "block committed");
        Ok(())
    }
}

impl io::Write for StreamWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf).map_err(io::Error::other)
    }

    /// No-op: completed blocks are already committed row-by-row, and the
    /// trailing partial block must stay buffered until `close` so that no
    /// undersized interior row is ever written.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for StreamWriter {
    fn drop(&mut self) {
        if !self.closed && !self.buf.is_empty() {
            warn!(
                stream = %self.stream,
                buffered = self.buf.len(),
                "stream writer dropped without close; buffered bytes discarded"
            );
        }
    }
}

impl std::fmt::Debug for StreamWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamWriter")
            .field("stream", &self.stream)
            .field("block_size", &self.block_size)
            .field("buffered", &self.buf.len())
            .field("blocks_written", &self.blocks_written)
            .field("closed", &self.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowstream_store::MemoryRowStore;

    fn test_config() -> StreamConfig {
        StreamConfig::new().with_block_size(8)
    }

    fn new_writer(store: &Arc<MemoryRowStore>, name: &str) -> StreamWriter {
        StreamWriter::create(Arc::clone(store) as Arc<dyn RowStore>, name, test_config()).unwrap()
    }

    #[test]
    fn test_create_existing_stream_fails() {
        let store = Arc::new(MemoryRowStore::new());
        let _w = new_writer(&store, "s");
        let err = StreamWriter::create(
            Arc::clone(&store) as Arc<dyn RowStore>,
            "s",
            test_config(),
        )
        .unwrap_err();
        assert!(err.is_already_exists());
    }

    #[test]
    fn test_invalid_block_size_rejected() {
        let store = Arc::new(MemoryRowStore::new());
        let err = StreamWriter::create(
            store as Arc<dyn RowStore>,
            "s",
            StreamConfig::new().with_block_size(0),
        )
        .unwrap_err();
        assert!(matches!(err, StreamError::InvalidConfig { .. }));
    }

    #[test]
    fn test_boundary_row_counts() {
        // B-1, B, B+1 bytes produce 1, 1, 2 rows respectively once closed.
        for (len, rows) in [(7usize, 1usize), (8, 1), (9, 2)] {
            let store = Arc::new(MemoryRowStore::new());
            let mut w = new_writer(&store, "s");
            assert_eq!(w.append(&vec![0xAB; len]).unwrap(), len);
            w.close().unwrap();
            assert_eq!(store.row_count("s").unwrap(), rows, "len={len}");
        }
    }

    #[test]
    fn test_full_blocks_commit_inside_append() {
        let store = Arc::new(MemoryRowStore::new());
        let mut w = new_writer(&store, "s");

        w.append(&[b'x'; 20]).unwrap();
        // Two full blocks committed, 4 bytes retained.
        assert_eq!(store.row_count("s").unwrap(), 2);
        assert_eq!(w.buffered(), 4);
        assert_eq!(w.blocks_written(), 2);

        w.close().unwrap();
        assert_eq!(store.row_count("s").unwrap(), 3);
        assert_eq!(w.buffered(), 0);
    }

    #[test]
    fn test_empty_stream_commits_zero_rows() {
        let store = Arc::new(MemoryRowStore::new());
        let mut w = new_writer(&store, "s");
        w.close().unwrap();
        assert_eq!(store.row_count("s").unwrap(), 0);
    }

    #[test]
    fn test_append_after_close_fails() {
        let store = Arc::new(MemoryRowStore::new());
        let mut w = new_writer(&store, "s");
        w.close().unwrap();
        assert!(w.append(b"late").unwrap_err().is_closed());
    }

    #[test]
    fn test_double_close_is_noop() {
        let store = Arc::new(MemoryRowStore::new());
        let mut w = new_writer(&store, "s");
        w.append(b"abc").unwrap();
        w.close().unwrap();
        let rows = store.row_count("s").unwrap();
        w.close().unwrap();
        assert_eq!(store.row_count("s").unwrap(), rows);
    }

    #[test]
    fn test_store_failure_propagates_with_context() {
        let store = Arc::new(MemoryRowStore::new());
        let mut w = new_writer(&store, "s");
        // Simulate the backing table vanishing under the session.
        store.drop_table("s").unwrap();

        let err = w.append(&[0u8; 8]).unwrap_err();
        assert!(err.is_store());
        assert!(err.to_string().contains("s"));
        assert!(err.to_string().contains("insert"));
    }

    #[test]
    fn test_io_write_adapter() {
        use std::io::Write;

        let store = Arc::new(MemoryRowStore::new());
        let mut w = new_writer(&store, "s");
        w.write_all(&[b'z'; 12]).unwrap();
        w.flush().unwrap();
        // flush leaves the partial block buffered.
        assert_eq!(store.row_count("s").unwrap(), 1);
        assert_eq!(w.buffered(), 4);
        w.close().unwrap();
        assert_eq!(store.row_count("s").unwrap(), 2);
    }
}
