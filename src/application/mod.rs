//! Application Layer
//!
//! Use cases that orchestrate the business flow. Rules live in the domain;
//! this layer validates input, sequences store mutations and persistence.
//!
//! ## Use Cases
//!
//! - `ReliefDesk` - camp and victim registration, restocking, distribution,
//!   lookup and reporting

pub mod desk;

pub use desk::{Distribution, DistributionReceipt, NewCamp, NewVictim, ReliefDesk, Restock};
