//! Operation results

use serde::Serialize;

/// What a successful `distribute` call moved from camp to victim.
///
/// `medical` is the amount actually consumed, after the critical-victim
/// floor, and matches what was added to the victim's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionReceipt {
    pub victim_id: String,
    pub camp_id: String,
    pub food: u32,
    pub medical: u32,
    pub requested_medical: u32,
}

impl DistributionReceipt {
    pub fn medical_floor_applied(&self) -> bool {
        self.medical != self.requested_medical
    }
}
