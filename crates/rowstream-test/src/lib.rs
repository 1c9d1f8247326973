//! # rowstream-test
//!
//! Integration tests for RowStream.
//!
//! This crate contains:
//! - Round-trip and boundary correctness tests
//! - Lazy end-of-stream contract tests
//! - Layered-codec compatibility tests

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Test utilities and helpers
pub mod utils;
