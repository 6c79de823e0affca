//! Record Kind Value Object
//!
//! Names the two persisted collections.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Camps,
    Victims,
}

impl RecordKind {
    /// Field that carries the record id in the legacy sequence format
    pub fn id_field(&self) -> &'static str {
        match self {
            RecordKind::Camps => "camp_id",
            RecordKind::Victims => "victim_id",
        }
    }

    /// Default file name inside the data directory
    pub fn default_file_name(&self) -> &'static str {
        match self {
            RecordKind::Camps => "camps.json",
            RecordKind::Victims => "victims.json",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Camps => f.write_str("camp"),
            RecordKind::Victims => f.write_str("victim"),
        }
    }
}
