//! On-disk record shapes and the legacy upgrade
//!
//! Files are read into permissive "stored" shapes where every field is
//! optional and legacy spellings sit next to canonical ones. The pure
//! `upgrade_*` functions then map a stored record into the typed entity.
//! Only the canonical shapes are ever written.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Camp, Victim};
use crate::domain::ports::StoreError;
use crate::domain::value_objects::{Health, RecordKind};

/// A collection file: the canonical keyed object or the legacy sequence.
#[derive(Debug)]
pub(crate) enum StoredCollection<T> {
    Keyed(IndexMap<String, T>),
    Sequence(Vec<T>),
}

/// Camp record as found on disk, canonical or legacy
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredCamp {
    #[serde(default)]
    pub camp_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub occupancy: Option<u32>,
    #[serde(default)]
    pub food: Option<u32>,
    #[serde(default)]
    pub medical: Option<u32>,
    #[serde(default)]
    pub volunteers: Option<u32>,
    #[serde(default)]
    pub max_capacity: Option<u32>,
    #[serde(default)]
    pub food_packets: Option<u32>,
    #[serde(default)]
    pub medical_kits: Option<u32>,
}

/// Victim record as found on disk, canonical or legacy
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredVictim {
    #[serde(default)]
    pub victim_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub camp: Option<String>,
    #[serde(default)]
    pub food_received: Option<u32>,
    #[serde(default)]
    pub medical_received: Option<u32>,
    #[serde(default)]
    pub health_condition: Option<String>,
    #[serde(default)]
    pub assigned_camp: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CampRecord<'a> {
    location: &'a str,
    capacity: u32,
    occupancy: u32,
    food: u32,
    medical: u32,
    volunteers: u32,
}

impl<'a> From<&'a Camp> for CampRecord<'a> {
    fn from(camp: &'a Camp) -> Self {
        Self {
            location: &camp.location,
            capacity: camp.capacity,
            occupancy: camp.occupancy,
            food: camp.food,
            medical: camp.medical,
            volunteers: camp.volunteers,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct VictimRecord<'a> {
    name: &'a str,
    age: u32,
    health: Health,
    camp: &'a str,
    food_received: u32,
    medical_received: u32,
}

impl<'a> From<&'a Victim> for VictimRecord<'a> {
    fn from(victim: &'a Victim) -> Self {
        Self {
            name: &victim.name,
            age: victim.age,
            health: victim.health,
            camp: &victim.camp,
            food_received: victim.food_received,
            medical_received: victim.medical_received,
        }
    }
}

/// Canonical value, else the legacy one. Records the legacy key when used.
fn pick<T>(
    canonical: Option<T>,
    legacy: Option<T>,
    legacy_key: &'static str,
    renamed: &mut Vec<&'static str>,
) -> Option<T> {
    match (canonical, legacy) {
        (Some(value), _) => Some(value),
        (None, Some(value)) => {
            renamed.push(legacy_key);
            Some(value)
        }
        (None, None) => None,
    }
}

/// Map a stored camp into the canonical entity.
///
/// Returns the legacy keys that were upgraded. Missing numbers default to
/// zero; the stored occupancy is kept only until the store recomputes it.
pub fn upgrade_camp(id: String, stored: StoredCamp) -> (Camp, Vec<&'static str>) {
    let mut renamed = Vec::new();
    let capacity = pick(stored.capacity, stored.max_capacity, "max_capacity", &mut renamed);
    let food = pick(stored.food, stored.food_packets, "food_packets", &mut renamed);
    let medical = pick(stored.medical, stored.medical_kits, "medical_kits", &mut renamed);

    let camp = Camp {
        id,
        location: stored.location.unwrap_or_default(),
        capacity: capacity.unwrap_or(0),
        occupancy: stored.occupancy.unwrap_or(0),
        food: food.unwrap_or(0),
        medical: medical.unwrap_or(0),
        volunteers: stored.volunteers.unwrap_or(0),
    };
    (camp, renamed)
}

/// A stored victim mapped into the canonical entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictimUpgrade {
    pub victim: Victim,
    /// Legacy keys that were read
    pub renamed: Vec<&'static str>,
    /// Health text that was not recognised; the victim is loaded as normal.
    pub unknown_health: Option<String>,
}

/// Map a stored victim into the canonical entity.
///
/// `name`, `age`, `health` and `camp` are required in one spelling or the
/// other; the received counters default to zero. Older desks stored any
/// health text, so an unrecognised value loads as [`Health::Normal`] and is
/// reported in [`VictimUpgrade::unknown_health`].
pub fn upgrade_victim(id: String, stored: StoredVictim) -> Result<VictimUpgrade, StoreError> {
    let invalid = |field: &str| StoreError::InvalidRecord {
        kind: RecordKind::Victims,
        id: id.clone(),
        message: format!("missing field '{field}'"),
    };

    let mut renamed = Vec::new();
    let health_text = pick(
        stored.health,
        stored.health_condition,
        "health_condition",
        &mut renamed,
    )
    .ok_or_else(|| invalid("health"))?;
    let camp = pick(stored.camp, stored.assigned_camp, "assigned_camp", &mut renamed)
        .ok_or_else(|| invalid("camp"))?;
    let name = stored.name.ok_or_else(|| invalid("name"))?;
    let age = stored.age.ok_or_else(|| invalid("age"))?;

    let (health, unknown_health) = match health_text.parse::<Health>() {
        Ok(health) => (health, None),
        Err(_) => (Health::Normal, Some(health_text)),
    };

    Ok(VictimUpgrade {
        victim: Victim {
            id,
            name,
            age,
            health,
            camp,
            food_received: stored.food_received.unwrap_or(0),
            medical_received: stored.medical_received.unwrap_or(0),
        },
        renamed,
        unknown_health,
    })
}

impl<T: DeserializeOwned> StoredCollection<T> {
    /// Parse a collection file. The layout is chosen by the first token so
    /// that a bad record reports serde's own error with line and column.
    pub(crate) fn parse(content: &str) -> serde_json::Result<Self> {
        if content.trim_start().starts_with('[') {
            serde_json::from_str(content).map(StoredCollection::Sequence)
        } else {
            serde_json::from_str(content).map(StoredCollection::Keyed)
        }
    }
}

impl<T> StoredCollection<T> {
    /// Key every record. Sequence entries are keyed by their own id field;
    /// entries without one are returned separately as skipped positions.
    pub(crate) fn into_keyed(
        self,
        id_of: impl Fn(&T) -> Option<String>,
    ) -> (IndexMap<String, T>, Vec<usize>) {
        match self {
            StoredCollection::Keyed(map) => (map, Vec::new()),
            StoredCollection::Sequence(items) => {
                let mut keyed = IndexMap::with_capacity(items.len());
                let mut skipped = Vec::new();
                for (index, item) in items.into_iter().enumerate() {
                    match id_of(&item) {
                        Some(id) => {
                            keyed.insert(id, item);
                        }
                        None => skipped.push(index),
                    }
                }
                (keyed, skipped)
            }
        }
    }
}
