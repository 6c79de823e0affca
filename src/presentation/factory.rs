//! Desk Factory
//!
//! Wires the relief desk to its JSON store. This is the dependency injection
//! point for the binary.

use crate::application::ReliefDesk;
use crate::config::Config;
use crate::error::ReliefResult;
use crate::infrastructure::JsonRecordRepository;

/// The relief desk backed by JSON files
pub type ConcreteReliefDesk = ReliefDesk<JsonRecordRepository>;

/// Repository for the files named in `config`
pub fn create_repository(config: &Config) -> JsonRecordRepository {
    JsonRecordRepository::with_paths(config.storage.camps_path(), config.storage.victims_path())
}

/// Open the desk: load both collections and reconcile occupancy.
pub fn open_desk(config: &Config) -> ReliefResult<ConcreteReliefDesk> {
    ReliefDesk::open(create_repository(config))
}
