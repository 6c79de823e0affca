//! Operation inputs
//!
//! Callers hand over already-typed values. Counts arrive signed so that a
//! negative value can be rejected with a typed error instead of wrapping.

use crate::domain::value_objects::Health;
use crate::error::{ReliefError, ReliefResult};

/// Input for `add_camp`
#[derive(Debug, Clone, Default)]
pub struct NewCamp {
    pub id: String,
    pub location: String,
    pub capacity: i64,
    pub food: i64,
    pub medical: i64,
    pub volunteers: i64,
}

/// Input for `add_resources`
#[derive(Debug, Clone, Default)]
pub struct Restock {
    pub camp_id: String,
    pub food: i64,
    pub medical: i64,
}

/// Input for `register_victim`
#[derive(Debug, Clone, Default)]
pub struct NewVictim {
    pub id: String,
    pub name: String,
    pub age: i64,
    /// `normal` or `critical`, any case
    pub health: String,
    pub camp_id: String,
}

/// Input for `distribute`
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub victim_id: String,
    pub food: i64,
    pub medical: i64,
}

pub(crate) fn count(field: &'static str, value: i64) -> ReliefResult<u32> {
    if value < 0 {
        return Err(ReliefError::invalid(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    u32::try_from(value)
        .map_err(|_| ReliefError::invalid(field, format!("too large (max {})", u32::MAX)))
}

pub(crate) fn required_text(field: &'static str, value: &str) -> ReliefResult<String> {
    if value.is_empty() {
        return Err(ReliefError::invalid(field, "must not be empty"));
    }
    Ok(value.to_string())
}

pub(crate) fn health(value: &str) -> ReliefResult<Health> {
    value
        .parse()
        .map_err(|e: crate::domain::value_objects::UnknownHealth| {
            ReliefError::invalid("health", e.to_string())
        })
}
