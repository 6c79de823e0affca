//! Victim entity
//!
//! A displaced person assigned to exactly one camp. Victims are never
//! removed or moved to another camp.

use crate::domain::value_objects::Health;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Victim {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub health: Health,
    pub camp: String,
    pub food_received: u32,
    pub medical_received: u32,
}

impl Victim {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        health: Health,
        camp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            health,
            camp: camp.into(),
            food_received: 0,
            medical_received: 0,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.health.is_critical()
    }

    /// Cumulative totals after receiving `food` and `medical`, or `None` on overflow.
    pub fn totals_after(&self, food: u32, medical: u32) -> Option<(u32, u32)> {
        Some((
            self.food_received.checked_add(food)?,
            self.medical_received.checked_add(medical)?,
        ))
    }
}
