//! Relief desk use case
//!
//! The operations a front end invokes: camp registration, restocking,
//! victim registration, distribution, lookup and reporting.

mod requests;
mod result;
mod use_case;

pub use requests::{Distribution, NewCamp, NewVictim, Restock};
pub use result::DistributionReceipt;
pub use use_case::ReliefDesk;
