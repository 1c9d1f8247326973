//! Stream reader: scans block rows in key order and exposes their
//! concatenated payload through a buffered pull interface.
//!
//! End-of-stream detection is lazy: the reader only reports exhaustion
//! after an actual fetch attempt has found no further row, never
//! preemptively. A request the pull buffer can satisfy outright performs
//! no fetch at all, so it cannot observe end-of-stream even if it drains
//! the last buffered byte.

use std::io;
use std::sync::Arc;

use bytes::BytesMut;
use tracing::{debug, trace};

use rowstream_store::{RowCursor, RowStore};

use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};
use crate::table::TableManager;

/// Whether a read left more of the stream to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// The request was fully served; the stream may hold more bytes.
    More,
    /// The underlying row scan is exhausted and the request overshot the
    /// remaining data.
    EndOfStream,
}

/// Result of one read call: byte count and end marker together.
///
/// Carrying both in one value means a read can deliver its final bytes and
/// the end-of-stream signal in the same call, exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOutcome {
    /// Number of bytes copied into the destination.
    pub bytes: usize,
    /// Whether end-of-stream was observed by this call.
    pub status: ReadStatus,
}

impl ReadOutcome {
    /// Returns true if this call observed end-of-stream.
    pub fn is_end_of_stream(&self) -> bool {
        self.status == ReadStatus::EndOfStream
    }
}

/// Reader session over an existing stream.
///
/// State machine: `Open -> Closed`, with an internal `Draining ->
/// Exhausted` sub-state once a fetch finds no further row. Sessions are
/// independent; any number of readers may scan the same stream
/// concurrently, each with its own cursor and buffer.
pub struct StreamReader {
    stream: String,
    /// Row cursor; dropped on close so the store handle is released on
    /// every exit path.
    cursor: Option<Box<dyn RowCursor>>,
    /// Bytes fetched but not yet delivered to the caller.
    buf: BytesMut,
    exhausted: bool,
    closed: bool,
}

impl StreamReader {
    /// Opens a reader over an existing stream.
    ///
    /// Fails with `NotFound` if the stream does not exist. The cursor is
    /// positioned before the first row; nothing is fetched until a read
    /// needs it.
    pub fn open(
        store: Arc<dyn RowStore>,
        stream: impl Into<String>,
        config: StreamConfig,
    ) -> StreamResult<Self> {
        config.validate().map_err(StreamError::invalid_config)?;
        let stream = stream.into();
        if !TableManager::new(store.as_ref()).exists(&stream)? {
            return Err(StreamError::not_found(&stream));
        }
        let cursor = store.scan(&stream).map_err(|e| {
            if e.is_table_not_found() {
                StreamError::not_found(&stream)
            } else {
                StreamError::store(&stream, "scan", e)
            }
        })?;
        debug!(stream = %stream, block_size = config.block_size, "stream reader opened");
        Ok(Self {
            stream,
            cursor: Some(cursor),
            buf: BytesMut::with_capacity(config.block_size),
            exhausted: false,
            closed: false,
        })
    }

    /// Reads up to `dst.len()` bytes from the stream.
    ///
    /// Rows are fetched only while the pull buffer holds fewer bytes than
    /// requested and the scan is not yet exhausted:
    ///
    /// - a request the buffer can satisfy returns `(dst.len(), More)` with
    ///   no fetch;
    /// - a request satisfied by fetching returns `(dst.len(), More)`;
    /// - a request that overshoots the remaining data returns whatever was
    ///   gathered (possibly zero bytes) together with `EndOfStream`;
    /// - once exhausted with an empty buffer, every further read returns
    ///   `(0, EndOfStream)` without touching the row store.
    pub fn read(&mut self, dst: &mut [u8]) -> StreamResult<ReadOutcome> {
        if self.closed {
            return Err(StreamError::closed("read"));
        }
        while self.buf.len() < dst.len() && !self.exhausted {
            self.fetch_next_block()?;
        }
        let n = dst.len().min(self.buf.len());
        dst[..n].copy_from_slice(&self.buf.split_to(n));
        let status = if n < dst.len() {
            ReadStatus::EndOfStream
        } else {
            ReadStatus::More
        };
        Ok(ReadOutcome { bytes: n, status })
    }

    /// Closes the reader and releases the row cursor. Idempotent.
    pub fn close(&mut self) -> StreamResult<()> {
        if self.closed {
            return Ok(());
        }
        self.cursor = None;
        self.closed = true;
        debug!(stream = %self.stream, "stream reader closed");
        Ok(())
    }

    /// Returns the stream name.
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// Returns true once the reader is closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns true once a fetch attempt has found no further row.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the number of fetched bytes not yet delivered.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    fn fetch_next_block(&mut self) -> StreamResult<()> {
        let cursor = self
            .cursor
            .as_mut()
            .ok_or_else(|| StreamError::closed("read"))?;
        match cursor
            .next_row()
            .map_err(|e| StreamError::store(&self.stream, "fetch", e))?
        {
            Some(row) => {
                trace!(
                    stream = %self.stream,
                    seq = %row.seq,
                    len = row.payload.len(),
                    "block fetched"
                );
                self.buf.extend_from_slice(&row.payload);
            }
            None => {
                trace!(stream = %self.stream, "row scan exhausted");
                self.exhausted = true;
            }
        }
        Ok(())
    }
}

impl io::Read for StreamReader {
    /// `io::Read` maps the outcome onto the standard contract: a call that
    /// observes end-of-stream alongside data returns just the count, and
    /// the following call returns `Ok(0)`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        StreamReader::read(self, buf)
            .map(|outcome| outcome.bytes)
            .map_err(io::Error::other)
    }
}

impl std::fmt::Debug for StreamReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamReader")
            .field("stream", &self.stream)
            .field("buffered", &self.buf.len())
            .field("exhausted", &self.exhausted)
            .field("closed", &self.closed)
            .finish()
    }
}
