//! # rowstream-common
//!
//! Common types and constants for RowStream.
//!
//! This crate provides the foundational pieces shared by the store adapter
//! and the stream codec:
//!
//! - **Types**: the `SeqId` row sequence key
//! - **Constants**: block-size defaults and bounds

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::SeqId;
