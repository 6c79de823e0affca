//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod record_repository;

pub use record_repository::{Camps, RecordRepository, StoreError, Victims};
