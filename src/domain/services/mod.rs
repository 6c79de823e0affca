//! Domain Services
//!
//! Stateless functions over the domain store.

pub mod report;

pub use report::{summarize, ReliefReport};
