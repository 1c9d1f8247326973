//! System-wide constants for RowStream.

// =============================================================================
// Block Size Constants
// =============================================================================

/// Default block size in bytes (32 KB).
///
/// Each completed block becomes one row in the backing table. 32 KB keeps
/// individual rows comfortably under common `max_allowed_packet`-style
/// limits while amortizing per-insert overhead.
pub const DEFAULT_BLOCK_SIZE: usize = 32 * 1024;

/// Minimum block size in bytes.
///
/// A block size of 1 degenerates to one row per byte; still valid, and
/// useful in tests that exercise block-boundary crossings.
pub const MIN_BLOCK_SIZE: usize = 1;

/// Maximum block size in bytes (16 MB).
///
/// Rows larger than this run into payload limits on most row stores.
pub const MAX_BLOCK_SIZE: usize = 16 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_bounds() {
        assert!(MIN_BLOCK_SIZE >= 1);
        assert!(DEFAULT_BLOCK_SIZE >= MIN_BLOCK_SIZE);
        assert!(DEFAULT_BLOCK_SIZE <= MAX_BLOCK_SIZE);
    }
}
