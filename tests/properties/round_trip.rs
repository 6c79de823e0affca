//! Property tests for the JSON store.

use proptest::prelude::*;

use reliefdesk::{JsonRecordRepository, NewCamp, NewVictim, ReliefDesk};
use tempfile::TempDir;

fn id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,8}").unwrap()
}

fn text() -> impl Strategy<Value = String> {
    // Free text, including quotes and non-ASCII, must survive the file.
    "[A-Za-z0-9 \"'\\\\éü李-]{1,16}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: reopening the data directory yields the same records in the same order.
    #[test]
    fn property_reopen_preserves_records(
        camps in proptest::collection::vec((id(), text(), 1u8..5, 0u16..100), 1..=5),
        names in proptest::collection::vec((text(), 0u8..100, any::<bool>()), 0..=6),
    ) {
        let dir = TempDir::new().unwrap();
        let mut desk = ReliefDesk::open(JsonRecordRepository::new(dir.path())).unwrap();

        let mut camp_ids = Vec::new();
        for (camp_id, location, capacity, food) in camps {
            let added = desk.add_camp(NewCamp {
                id: camp_id.clone(),
                location,
                capacity: i64::from(capacity),
                food: i64::from(food),
                medical: 0,
                volunteers: 0,
            });
            if added.is_ok() {
                camp_ids.push(camp_id);
            }
        }
        for (n, (name, age, critical)) in names.into_iter().enumerate() {
            let _ = desk.register_victim(NewVictim {
                id: format!("V{n}"),
                name,
                age: i64::from(age),
                health: if critical { "critical" } else { "normal" }.to_string(),
                camp_id: camp_ids[n % camp_ids.len()].clone(),
            });
        }

        let reopened = ReliefDesk::open(JsonRecordRepository::new(dir.path())).unwrap();

        prop_assert_eq!(reopened.store(), desk.store());
        let before: Vec<&str> = desk.list_camps().iter().map(|c| c.id.as_str()).collect();
        let after: Vec<&str> = reopened.list_camps().iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(before, after);
    }
}
