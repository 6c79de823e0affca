//! ReliefDesk use case
//!
//! Every mutating operation validates first, then changes the in-memory
//! store, then writes the affected collections through the repository. A
//! failed write is reported as [`ReliefError::Persistence`]; the in-memory
//! change is kept.

use crate::domain::entities::{Camp, Victim};
use crate::domain::ports::RecordRepository;
use crate::domain::services::{self, ReliefReport};
use crate::domain::value_objects::RecordKind;
use crate::domain::ReliefStore;
use crate::error::{ReliefError, ReliefResult};

use super::requests::{self, Distribution, NewCamp, NewVictim, Restock};
use super::result::DistributionReceipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persist {
    Camps,
    Both,
}

pub struct ReliefDesk<R: RecordRepository> {
    store: ReliefStore,
    repository: R,
}

impl<R: RecordRepository> ReliefDesk<R> {
    /// Load both collections, recompute occupancy and write the camps back.
    ///
    /// Writing camps on open makes a legacy camps file canonical, matching the
    /// long-standing behaviour of the desk. Victims are only rewritten by
    /// [`ReliefDesk::persist_all`] or by a victim mutation.
    pub fn open(repository: R) -> ReliefResult<Self> {
        let camps = repository.load_camps()?;
        let victims = repository.load_victims()?;
        tracing::debug!(
            store = %repository.describe(),
            camps = camps.len(),
            victims = victims.len(),
            "Opened relief store"
        );

        let mut desk = Self {
            store: ReliefStore::from_parts(camps, victims),
            repository,
        };
        desk.refresh_occupancy();
        desk.persist(Persist::Camps)?;
        Ok(desk)
    }

    pub fn store(&self) -> &ReliefStore {
        &self.store
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn add_camp(&mut self, request: NewCamp) -> ReliefResult<&Camp> {
        let id = requests::required_text("camp id", &request.id)?;
        let camp = Camp::new(
            id.clone(),
            request.location,
            requests::count("capacity", request.capacity)?,
            requests::count("food", request.food)?,
            requests::count("medical", request.medical)?,
            requests::count("volunteers", request.volunteers)?,
        );

        if !self.store.insert_camp(camp) {
            return Err(ReliefError::DuplicateId {
                kind: RecordKind::Camps,
                id,
            });
        }
        tracing::info!(camp = %id, "Camp added");

        self.persist(Persist::Camps)?;
        self.store
            .camp(&id)
            .ok_or_else(|| ReliefError::camp_not_found(&id))
    }

    pub fn add_resources(&mut self, request: Restock) -> ReliefResult<&Camp> {
        let food = requests::count("food", request.food)?;
        let medical = requests::count("medical", request.medical)?;

        let camp = self
            .store
            .camp_mut(&request.camp_id)
            .ok_or_else(|| ReliefError::camp_not_found(&request.camp_id))?;
        let (new_food, new_medical) = camp
            .restocked(food, medical)
            .ok_or_else(|| ReliefError::invalid("stock", "total would exceed the maximum"))?;
        camp.food = new_food;
        camp.medical = new_medical;
        tracing::info!(
            camp = %request.camp_id,
            food,
            medical,
            "Resources added"
        );

        self.persist(Persist::Camps)?;
        self.store
            .camp(&request.camp_id)
            .ok_or_else(|| ReliefError::camp_not_found(&request.camp_id))
    }

    pub fn register_victim(&mut self, request: NewVictim) -> ReliefResult<&Victim> {
        let id = requests::required_text("victim id", &request.id)?;
        let camp_id = requests::required_text("camp id", &request.camp_id)?;
        let age = requests::count("age", request.age)?;
        let health = requests::health(&request.health)?;

        if self.store.victim(&id).is_some() {
            return Err(ReliefError::DuplicateId {
                kind: RecordKind::Victims,
                id,
            });
        }
        let camp = self
            .store
            .camp(&camp_id)
            .ok_or_else(|| ReliefError::camp_not_found(&camp_id))?;
        if !camp.has_room() {
            return Err(ReliefError::CampFull {
                camp_id,
                capacity: camp.capacity,
            });
        }

        self.store
            .insert_victim(Victim::new(id.clone(), request.name, age, health, camp_id.clone()));
        self.refresh_occupancy();
        tracing::info!(victim = %id, camp = %camp_id, %health, "Victim registered");

        self.persist(Persist::Both)?;
        self.store
            .victim(&id)
            .ok_or_else(|| ReliefError::victim_not_found(&id))
    }

    /// Move food and medical units from the victim's camp to the victim.
    ///
    /// A critical victim consumes at least one medical unit. The adjusted
    /// amount is applied to both the camp stock and the victim total. Nothing
    /// changes unless the camp can cover the whole request.
    pub fn distribute(&mut self, request: Distribution) -> ReliefResult<DistributionReceipt> {
        let food = requests::count("food", request.food)?;
        let requested_medical = requests::count("medical", request.medical)?;

        let victim = self
            .store
            .victim(&request.victim_id)
            .ok_or_else(|| ReliefError::victim_not_found(&request.victim_id))?;
        let medical = victim.health.required_medical(requested_medical);
        let camp_id = victim.camp.clone();

        let camp = self
            .store
            .camp(&camp_id)
            .ok_or_else(|| ReliefError::camp_not_found(&camp_id))?;
        if !camp.can_supply(food, medical) {
            return Err(ReliefError::InsufficientResources {
                camp_id,
                needed_food: food,
                needed_medical: medical,
                available_food: camp.food,
                available_medical: camp.medical,
            });
        }
        let (food_total, medical_total) = victim
            .totals_after(food, medical)
            .ok_or_else(|| ReliefError::invalid("distribution", "victim total would overflow"))?;

        if let Some(camp) = self.store.camp_mut(&camp_id) {
            camp.withdraw(food, medical);
        }
        if let Some(victim) = self.store.victim_mut(&request.victim_id) {
            victim.food_received = food_total;
            victim.medical_received = medical_total;
        }
        tracing::info!(
            victim = %request.victim_id,
            camp = %camp_id,
            food,
            medical,
            requested_medical,
            "Resources distributed"
        );

        self.persist(Persist::Both)?;
        Ok(DistributionReceipt {
            victim_id: request.victim_id,
            camp_id,
            food,
            medical,
            requested_medical,
        })
    }

    pub fn find_victim(&self, id: &str) -> ReliefResult<&Victim> {
        self.store
            .victim(id)
            .ok_or_else(|| ReliefError::victim_not_found(id))
    }

    pub fn list_camps(&self) -> Vec<&Camp> {
        self.store.camps().collect()
    }

    pub fn list_victims(&self) -> Vec<&Victim> {
        self.store.victims().collect()
    }

    pub fn generate_report(&self) -> ReliefReport {
        services::summarize(&self.store)
    }

    /// Write both collections in canonical form.
    pub fn persist_all(&self) -> ReliefResult<()> {
        self.persist(Persist::Both)
    }

    fn refresh_occupancy(&mut self) {
        for victim in self.store.recompute_occupancy() {
            tracing::warn!(victim = %victim, "Victim references a camp that does not exist");
        }
    }

    /// Attempt every requested write and report the first failure.
    fn persist(&self, what: Persist) -> ReliefResult<()> {
        let camps = self.repository.save_camps(self.store.camp_records());
        let victims = match what {
            Persist::Both => self.repository.save_victims(self.store.victim_records()),
            Persist::Camps => Ok(()),
        };

        for result in [camps, victims] {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Could not save relief store");
                return Err(e.into());
            }
        }
        Ok(())
    }
}
