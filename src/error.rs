//! Error types for Reliefdesk
//!
//! Uses `thiserror` for library errors. Every failure an operation can report
//! is recoverable at the call site; nothing here aborts the process.

use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::RecordKind;

/// Result type alias for Reliefdesk operations
pub type ReliefResult<T> = Result<T, ReliefError>;

/// Main error type for Reliefdesk operations
#[derive(Error, Debug)]
pub enum ReliefError {
    /// A camp or victim with this id already exists
    #[error("{kind} '{id}' already exists")]
    DuplicateId { kind: RecordKind, id: String },

    /// No camp or victim with this id
    #[error("{kind} '{id}' not found")]
    NotFound { kind: RecordKind, id: String },

    /// Camp has no free places left
    #[error("camp '{camp_id}' is full (capacity {capacity})")]
    CampFull { camp_id: String, capacity: u32 },

    /// Camp stock cannot cover a distribution
    #[error(
        "insufficient resources in camp '{camp_id}': need {needed_food} food / {needed_medical} medical, have {available_food} food / {available_medical} medical"
    )]
    InsufficientResources {
        camp_id: String,
        needed_food: u32,
        needed_medical: u32,
        available_food: u32,
        available_medical: u32,
    },

    /// Rejected input value
    #[error("invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    /// Reading or writing the store failed. After a mutation the in-memory
    /// change is kept.
    #[error("relief store error: {0}")]
    Persistence(#[from] StoreError),
}

impl ReliefError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ReliefError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn camp_not_found(id: &str) -> Self {
        ReliefError::NotFound {
            kind: RecordKind::Camps,
            id: id.to_string(),
        }
    }

    pub(crate) fn victim_not_found(id: &str) -> Self {
        ReliefError::NotFound {
            kind: RecordKind::Victims,
            id: id.to_string(),
        }
    }
}
