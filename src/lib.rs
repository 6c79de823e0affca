//! Reliefdesk - relief camp and aid distribution tracking
//!
//! Keeps two collections, camps and victims, in memory and mirrors them to
//! JSON files after every change. Camp occupancy is always derived from the
//! victim assignments.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Distribution, DistributionReceipt, NewCamp, NewVictim, ReliefDesk, Restock};
pub use config::{Config, OutputFormat};
pub use domain::entities::{Camp, Victim};
pub use domain::ports::{RecordRepository, StoreError};
pub use domain::services::ReliefReport;
pub use domain::value_objects::{Health, RecordKind};
pub use domain::ReliefStore;
pub use error::{ReliefError, ReliefResult};
pub use infrastructure::JsonRecordRepository;
