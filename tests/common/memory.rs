//! In-memory repository double.

use std::cell::RefCell;

use reliefdesk::domain::ports::{Camps, RecordRepository, StoreError, Victims};

#[derive(Debug, Default)]
pub struct MemoryRepo {
    pub camps: RefCell<Camps>,
    pub victims: RefCell<Victims>,
}

impl RecordRepository for MemoryRepo {
    fn load_camps(&self) -> Result<Camps, StoreError> {
        Ok(self.camps.borrow().clone())
    }

    fn load_victims(&self) -> Result<Victims, StoreError> {
        Ok(self.victims.borrow().clone())
    }

    fn save_camps(&self, camps: &Camps) -> Result<(), StoreError> {
        *self.camps.borrow_mut() = camps.clone();
        Ok(())
    }

    fn save_victims(&self, victims: &Victims) -> Result<(), StoreError> {
        *self.victims.borrow_mut() = victims.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
