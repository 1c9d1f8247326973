//! Core identifier types for RowStream.
//!
//! These types provide type-safe wrappers around numeric identifiers,
//! preventing accidental misuse of different ID types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row sequence key - uniquely identifies a block row within a stream table.
///
/// The backing row store assigns sequence keys on insertion; they increase
/// monotonically and are never reused, so ascending key order is write
/// order.
///
/// # Example
///
/// ```rust
/// use rowstream_common::types::SeqId;
///
/// let seq = SeqId::new(42);
/// assert_eq!(seq.as_u64(), 42);
/// assert!(seq.next() > seq);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SeqId(u64);

impl SeqId {
    /// Invalid sequence key constant, used as a sentinel value.
    pub const INVALID: Self = Self(u64::MAX);

    /// First sequence key a store may assign.
    pub const FIRST: Self = Self(1);

    /// Creates a new `SeqId` from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next sequence key.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Checks if this is a valid sequence key.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Debug for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "SeqId(INVALID)")
        } else {
            write!(f, "SeqId({})", self.0)
        }
    }
}

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SeqId {
    #[inline]
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<SeqId> for u64 {
    #[inline]
    fn from(id: SeqId) -> Self {
        id.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_id_ordering() {
        let a = SeqId::new(1);
        let b = SeqId::new(2);
        assert!(a < b);
        assert_eq!(a.next(), b);
    }

    #[test]
    fn test_seq_id_sentinel() {
        assert!(!SeqId::INVALID.is_valid());
        assert!(SeqId::FIRST.is_valid());
        assert_eq!(SeqId::INVALID.next(), SeqId::INVALID);
        assert_eq!(format!("{:?}", SeqId::INVALID), "SeqId(INVALID)");
        assert_eq!(format!("{:?}", SeqId::new(7)), "SeqId(7)");
    }

    #[test]
    fn test_seq_id_conversions() {
        let seq: SeqId = 9u64.into();
        assert_eq!(u64::from(seq), 9);
        assert_eq!(seq.to_string(), "9");
    }
}
