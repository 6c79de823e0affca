//! Aggregate report over the current store state.

use std::fmt;

use serde::Serialize;

use crate::domain::ReliefStore;

/// Snapshot totals for the desk summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReliefReport {
    pub total_camps: usize,
    pub total_victims: usize,
    /// First camp with the highest occupancy, in enumeration order
    pub busiest_camp: Option<String>,
    pub food_distributed: u64,
    pub medical_distributed: u64,
    pub critical_victims: usize,
}

impl ReliefReport {
    pub fn busiest_camp_label(&self) -> &str {
        self.busiest_camp.as_deref().unwrap_or("none")
    }
}

/// Pure function of `store`; no side effects.
pub fn summarize(store: &ReliefStore) -> ReliefReport {
    // `max_by_key` keeps the last maximum; ties go to the first camp here.
    let busiest_camp = store
        .camps()
        .fold(None, |best: Option<(&str, u32)>, camp| match best {
            Some((_, occupancy)) if occupancy >= camp.occupancy => best,
            _ => Some((camp.id.as_str(), camp.occupancy)),
        })
        .map(|(id, _)| id.to_string());

    let mut food_distributed = 0u64;
    let mut medical_distributed = 0u64;
    let mut critical_victims = 0usize;
    for victim in store.victims() {
        food_distributed += u64::from(victim.food_received);
        medical_distributed += u64::from(victim.medical_received);
        if victim.is_critical() {
            critical_victims += 1;
        }
    }

    ReliefReport {
        total_camps: store.camp_count(),
        total_victims: store.victim_count(),
        busiest_camp,
        food_distributed,
        medical_distributed,
        critical_victims,
    }
}

impl fmt::Display for ReliefReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Camps: {}", self.total_camps)?;
        writeln!(f, "Total Victims: {}", self.total_victims)?;
        writeln!(f, "Camp with Highest Occupancy: {}", self.busiest_camp_label())?;
        writeln!(f, "Total Food Distributed: {}", self.food_distributed)?;
        writeln!(f, "Total Medical Distributed: {}", self.medical_distributed)?;
        write!(f, "Critical Victims: {}", self.critical_victims)
    }
}
