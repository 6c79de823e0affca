//! Common test utilities for Reliefdesk integration tests.
//!
//! - `TestEnv`: isolated data directory plus helpers to run the CLI
//! - `MemoryRepo`: in-memory `RecordRepository` for library-level tests
//! - Fixtures: legacy data files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod memory;

pub use env::*;
pub use fixtures::*;
pub use memory::*;
