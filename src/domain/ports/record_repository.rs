//! RecordRepository port
//!
//! Loads and saves the camp and victim collections. Implementations act as a
//! serialization boundary only; the domain store owns the data.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::domain::entities::{Camp, Victim};
use crate::domain::value_objects::RecordKind;

pub type Camps = IndexMap<String, Camp>;
pub type Victims = IndexMap<String, Victim>;

pub trait RecordRepository {
    /// Load all camps. A missing store yields an empty collection.
    fn load_camps(&self) -> Result<Camps, StoreError>;

    /// Load all victims. A missing store yields an empty collection.
    fn load_victims(&self) -> Result<Victims, StoreError>;

    /// Replace the stored camp collection with `camps`.
    fn save_camps(&self, camps: &Camps) -> Result<(), StoreError>;

    /// Replace the stored victim collection with `victims`.
    fn save_victims(&self, victims: &Victims) -> Result<(), StoreError>;

    /// Human-readable location of the store, for diagnostics.
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to access {path}: {message}")]
    Access { path: PathBuf, message: String },

    #[error("failed to serialize {kind} records: {message}")]
    Serialization { kind: RecordKind, message: String },

    #[error("store file corrupted: {path}\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("invalid {kind} record '{id}': {message}")]
    InvalidRecord {
        kind: RecordKind,
        id: String,
        message: String,
    },
}
