//! Domain Entities
//!
//! - `Camp` - a relief site with capacity and stock
//! - `Victim` - a displaced person assigned to one camp

mod camp;
mod victim;

pub use camp::Camp;
pub use victim::Victim;
