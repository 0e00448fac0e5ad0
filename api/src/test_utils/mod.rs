//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository keeps service tests off the filesystem; the
//! JSON file adapter and the HTTP layer are exercised against a temp dir.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
