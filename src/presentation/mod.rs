//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `factory` - wires the desk to its JSON store
//! - `output` - tables and JSON values

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_repository, open_desk, ConcreteReliefDesk};
