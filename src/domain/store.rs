//! Domain Store
//!
//! In-memory camp and victim collections. Enumeration follows insertion
//! order, which for loaded data is the order of the backing file.

use crate::domain::entities::{Camp, Victim};
use crate::domain::ports::{Camps, Victims};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReliefStore {
    camps: Camps,
    victims: Victims,
}

impl ReliefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded collections as they are. Stored occupancy
    /// stays until [`ReliefStore::recompute_occupancy`] runs.
    pub fn from_parts(camps: Camps, victims: Victims) -> Self {
        Self { camps, victims }
    }

    pub fn camp(&self, id: &str) -> Option<&Camp> {
        self.camps.get(id)
    }

    pub fn victim(&self, id: &str) -> Option<&Victim> {
        self.victims.get(id)
    }

    pub fn camps(&self) -> impl Iterator<Item = &Camp> {
        self.camps.values()
    }

    pub fn victims(&self) -> impl Iterator<Item = &Victim> {
        self.victims.values()
    }

    pub fn victims_in_camp<'a>(&'a self, camp_id: &'a str) -> impl Iterator<Item = &'a Victim> {
        self.victims.values().filter(move |v| v.camp == camp_id)
    }

    pub fn camp_count(&self) -> usize {
        self.camps.len()
    }

    pub fn victim_count(&self) -> usize {
        self.victims.len()
    }

    pub fn camp_records(&self) -> &Camps {
        &self.camps
    }

    pub fn victim_records(&self) -> &Victims {
        &self.victims
    }

    /// Reset every occupancy to zero and count victims per camp.
    ///
    /// Victims pointing at a camp that does not exist are skipped; their ids
    /// are returned.
    pub fn recompute_occupancy(&mut self) -> Vec<String> {
        for camp in self.camps.values_mut() {
            camp.occupancy = 0;
        }

        let mut dangling = Vec::new();
        for victim in self.victims.values() {
            match self.camps.get_mut(&victim.camp) {
                Some(camp) => camp.occupancy += 1,
                None => dangling.push(victim.id.clone()),
            }
        }
        dangling
    }

    pub(crate) fn camp_mut(&mut self, id: &str) -> Option<&mut Camp> {
        self.camps.get_mut(id)
    }

    pub(crate) fn victim_mut(&mut self, id: &str) -> Option<&mut Victim> {
        self.victims.get_mut(id)
    }

    /// Insert a camp. Returns `false` (and leaves the store untouched) if the
    /// id is taken.
    pub(crate) fn insert_camp(&mut self, camp: Camp) -> bool {
        if self.camps.contains_key(&camp.id) {
            return false;
        }
        self.camps.insert(camp.id.clone(), camp);
        true
    }

    /// Insert a victim. Returns `false` (and leaves the store untouched) if the
    /// id is taken. Occupancy is not updated here.
    pub(crate) fn insert_victim(&mut self, victim: Victim) -> bool {
        if self.victims.contains_key(&victim.id) {
            return false;
        }
        self.victims.insert(victim.id.clone(), victim);
        true
    }
}
