//! Property tests for camp occupancy bookkeeping.

use proptest::prelude::*;

use reliefdesk::{NewCamp, NewVictim, ReliefDesk, ReliefError};

use crate::common::MemoryRepo;

fn camp_request(index: usize, capacity: u8) -> NewCamp {
    NewCamp {
        id: format!("C{index}"),
        location: "Field".to_string(),
        capacity: i64::from(capacity),
        food: 0,
        medical: 0,
        volunteers: 0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: occupancy equals the assigned victims and never exceeds capacity.
    #[test]
    fn property_occupancy_matches_assignments(
        capacities in proptest::collection::vec(0u8..4, 1..=4),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..=24),
    ) {
        let mut desk = ReliefDesk::open(MemoryRepo::default()).unwrap();
        for (i, capacity) in capacities.iter().enumerate() {
            desk.add_camp(camp_request(i, *capacity)).unwrap();
        }

        for (n, pick) in picks.iter().enumerate() {
            let camp = pick.index(capacities.len());
            let result = desk.register_victim(NewVictim {
                id: format!("V{n}"),
                name: "Someone".to_string(),
                age: 40,
                health: "normal".to_string(),
                camp_id: format!("C{camp}"),
            });
            match result {
                Ok(_) => {}
                Err(ReliefError::CampFull { capacity, .. }) => {
                    prop_assert_eq!(capacity, u32::from(capacities[camp]));
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }

        for camp in desk.list_camps() {
            let assigned = desk.store().victims_in_camp(&camp.id).count();
            prop_assert_eq!(camp.occupancy as usize, assigned);
            prop_assert!(camp.occupancy <= camp.capacity);
        }
    }
}
