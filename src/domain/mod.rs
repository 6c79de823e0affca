//! Domain Layer
//!
//! Pure business types without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Camp and Victim
//! - `value_objects/` - Health, RecordKind
//! - `store` - in-memory collections and the occupancy invariant
//! - `services/` - reporting
//! - `ports/` - persistence interface implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod services;
mod store;
pub mod value_objects;

pub use store::ReliefStore;
