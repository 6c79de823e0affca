//! Reusable data-file fixtures.

/// Camps in the old list layout with old field names
pub const LEGACY_CAMPS: &str = r#"[
    {"camp_id": "C1", "location": "North Field", "max_capacity": 10, "food_packets": 3},
    {"camp_id": "C2", "location": "River Bank", "max_capacity": 2, "food_packets": 8, "medical_kits": 4, "occupancy": 7}
]"#;

/// Victims in the old list layout with old field names
pub const LEGACY_VICTIMS: &str = r#"[
    {"victim_id": "V1", "name": "Asha", "age": 34, "health_condition": "critical", "assigned_camp": "C2"},
    {"victim_id": "V2", "name": "Tomas", "age": 61, "health_condition": "normal", "assigned_camp": "C2", "food_received": 2}
]"#;
