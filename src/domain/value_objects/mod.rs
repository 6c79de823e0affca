//! Value Objects
//!
//! Immutable domain types with no identity.

mod health;
mod record_kind;

pub use health::{Health, UnknownHealth};
pub use record_kind::RecordKind;
