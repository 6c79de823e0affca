//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file I/O lives here.
//!
//! ## Structure
//!
//! - `fs/` - local file access with atomic replace
//! - `repositories/` - the JSON record repository

pub mod fs;
pub mod repositories;

pub use fs::LocalFs;
pub use repositories::JsonRecordRepository;
