//! Camp entity
//!
//! A relief site with a finite number of places and a stock of food and
//! medical units.

/// A relief camp.
///
/// `occupancy` is a cache of the number of victims assigned here. It is
/// recomputed by [`ReliefStore::recompute_occupancy`](crate::domain::ReliefStore::recompute_occupancy)
/// and never trusted from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    pub id: String,
    pub location: String,
    pub capacity: u32,
    pub occupancy: u32,
    pub food: u32,
    pub medical: u32,
    pub volunteers: u32,
}

impl Camp {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        capacity: u32,
        food: u32,
        medical: u32,
        volunteers: u32,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            capacity,
            occupancy: 0,
            food,
            medical,
            volunteers,
        }
    }

    pub fn has_room(&self) -> bool {
        self.occupancy < self.capacity
    }

    pub fn can_supply(&self, food: u32, medical: u32) -> bool {
        self.food >= food && self.medical >= medical
    }

    /// Stock after adding `food` and `medical`, or `None` on overflow.
    pub fn restocked(&self, food: u32, medical: u32) -> Option<(u32, u32)> {
        Some((self.food.checked_add(food)?, self.medical.checked_add(medical)?))
    }

    /// Remove stock. Callers check [`Camp::can_supply`] first.
    pub(crate) fn withdraw(&mut self, food: u32, medical: u32) {
        debug_assert!(self.can_supply(food, medical));
        self.food -= food;
        self.medical -= medical;
    }
}
