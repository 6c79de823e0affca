//! File system access

mod local;

pub use local::LocalFs;
