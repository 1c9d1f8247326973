//! Stream configuration.

use serde::{Deserialize, Serialize};

use rowstream_common::{DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};

/// Configuration shared by the writer and reader of a stream.
///
/// The block size is not persisted per stream, so the writer and reader of
/// a given stream must be constructed with the same value; changing it is a
/// breaking change for existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Size of each committed block row in bytes. The final block of a
    /// stream may be shorter.
    pub block_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl StreamConfig {
    /// Creates a configuration with the default block size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block size.
    #[must_use]
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(format!(
                "block size must be at least {MIN_BLOCK_SIZE} byte(s)"
            ));
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(format!("block size must be at most {MAX_BLOCK_SIZE} bytes"));
        }
        Ok(())
    }
}
