//! Repository implementations

pub mod json;

pub use json::JsonRecordRepository;
