//! # rowstream-store
//!
//! Row store adapter seam for RowStream.
//!
//! The stream codec never talks to a database directly; it goes through the
//! [`RowStore`] trait, which models the backing database as an opaque row
//! store offering exactly what the codec needs:
//!
//! - table existence checks, creation, and deletion
//! - ordered row insertion (the store assigns the sequence key)
//! - ordered row retrieval through an incremental [`RowCursor`]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            RowStore Trait               │
//! │  (exists, create, drop, insert, scan)   │
//! └─────────────────────────────────────────┘
//!              │                   │
//!              ▼                   ▼
//! ┌─────────────────────┐  ┌─────────────────────┐
//! │   MemoryRowStore    │  │   SqlRowStore<E>    │
//! │   (in-process)      │  │   (any SqlExecutor) │
//! └─────────────────────┘  └─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;

/// In-memory reference backend.
pub mod memory;

/// SQL statement adapter over an opaque executor.
pub mod sql;

/// Core adapter traits and row types.
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryRowStore;
pub use sql::{SqlExecutor, SqlRowStore, SqlRows};
pub use store::{Row, RowCursor, RowStore};
