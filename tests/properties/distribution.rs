//! Property tests for distribution accounting.

use proptest::prelude::*;

use reliefdesk::{Distribution, NewCamp, NewVictim, ReliefDesk};

use crate::common::MemoryRepo;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: units leave the camp exactly as they reach the victim, and a
    /// rejected distribution changes nothing.
    #[test]
    fn property_distribution_conserves_stock(
        food_stock in 0u16..50,
        medical_stock in 0u16..50,
        critical in any::<bool>(),
        requests in proptest::collection::vec((0u16..20, 0u16..20), 0..=12),
    ) {
        let mut desk = ReliefDesk::open(MemoryRepo::default()).unwrap();
        desk.add_camp(NewCamp {
            id: "C1".to_string(),
            location: "Field".to_string(),
            capacity: 1,
            food: i64::from(food_stock),
            medical: i64::from(medical_stock),
            volunteers: 0,
        })
        .unwrap();
        desk.register_victim(NewVictim {
            id: "V1".to_string(),
            name: "Asha".to_string(),
            age: 30,
            health: if critical { "critical" } else { "normal" }.to_string(),
            camp_id: "C1".to_string(),
        })
        .unwrap();

        for (food, medical) in requests {
            let before = desk.store().camp("C1").unwrap().clone();
            let outcome = desk.distribute(Distribution {
                victim_id: "V1".to_string(),
                food: i64::from(food),
                medical: i64::from(medical),
            });
            let after = desk.store().camp("C1").unwrap();

            match outcome {
                Ok(receipt) => {
                    prop_assert_eq!(before.food - after.food, receipt.food);
                    prop_assert_eq!(before.medical - after.medical, receipt.medical);
                    if critical {
                        prop_assert!(receipt.medical >= 1);
                    }
                }
                Err(_) => prop_assert_eq!(&before, after),
            }

            let victim = desk.find_victim("V1").unwrap();
            prop_assert_eq!(
                u32::from(food_stock),
                after.food + victim.food_received
            );
            prop_assert_eq!(
                u32::from(medical_stock),
                after.medical + victim.medical_received
            );
        }
    }
}
