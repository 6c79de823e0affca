//! JSON Record Repository
//!
//! Implements the RecordRepository port with one pretty-printed JSON file per
//! collection (`camps.json`, `victims.json` by default).

mod schema;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::ports::{Camps, RecordRepository, StoreError, Victims};
use crate::domain::value_objects::RecordKind;
use crate::infrastructure::fs::LocalFs;

use schema::{CampRecord, StoredCollection, VictimRecord};
pub use schema::{upgrade_camp, upgrade_victim, StoredCamp, StoredVictim, VictimUpgrade};

/// JSON-file repository
pub struct JsonRecordRepository {
    camps_path: PathBuf,
    victims_path: PathBuf,
    fs: LocalFs,
}

impl JsonRecordRepository {
    /// Default file names inside `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self::with_paths(
            data_dir.join(RecordKind::Camps.default_file_name()),
            data_dir.join(RecordKind::Victims.default_file_name()),
        )
    }

    pub fn with_paths(camps_path: PathBuf, victims_path: PathBuf) -> Self {
        Self {
            camps_path,
            victims_path,
            fs: LocalFs::new(),
        }
    }

    pub fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Camps => &self.camps_path,
            RecordKind::Victims => &self.victims_path,
        }
    }

    fn lock_path(&self, kind: RecordKind) -> PathBuf {
        self.path(kind).with_extension("lock")
    }

    /// Read and key a collection file. A missing file is an empty collection.
    fn read_collection<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        id_of: impl Fn(&T) -> Option<String>,
    ) -> Result<IndexMap<String, T>, StoreError> {
        let path = self.path(kind);
        if !self.fs.exists(path) {
            tracing::debug!(path = %path.display(), "No {kind} store yet, starting empty");
            return Ok(IndexMap::new());
        }

        let content = self.fs.read(path).map_err(|e| StoreError::Access {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let collection =
            StoredCollection::<T>::parse(&content).map_err(|e| StoreError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if matches!(collection, StoredCollection::Sequence(_)) {
            tracing::warn!(path = %path.display(), "Upgrading legacy {kind} list to keyed records");
        }
        let (keyed, skipped) = collection.into_keyed(id_of);
        for index in skipped {
            tracing::warn!(
                path = %path.display(),
                index,
                "Skipping {kind} entry without '{}'",
                kind.id_field()
            );
        }
        tracing::debug!(path = %path.display(), records = keyed.len(), "Loaded {kind} records");
        Ok(keyed)
    }

    fn write_collection<T: Serialize>(
        &self,
        kind: RecordKind,
        records: &IndexMap<&str, T>,
    ) -> Result<(), StoreError> {
        let path = self.path(kind);
        let content = to_pretty_json(records).map_err(|e| StoreError::Serialization {
            kind,
            message: e.to_string(),
        })?;

        let access = |e: std::io::Error| StoreError::Access {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        self.fs
            .with_lock(&self.lock_path(kind), || self.fs.write_atomic(path, &content))
            .map_err(access)?
            .map_err(access)?;

        tracing::debug!(path = %path.display(), records = records.len(), "Saved {kind} records");
        Ok(())
    }
}

impl RecordRepository for JsonRecordRepository {
    fn load_camps(&self) -> Result<Camps, StoreError> {
        let stored = self.read_collection::<StoredCamp>(RecordKind::Camps, |c| c.camp_id.clone())?;

        let mut camps = Camps::with_capacity(stored.len());
        for (id, record) in stored {
            let (camp, renamed) = upgrade_camp(id.clone(), record);
            if !renamed.is_empty() {
                tracing::warn!(camp = %id, legacy_keys = ?renamed, "Upgraded legacy camp fields");
            }
            camps.insert(id, camp);
        }
        Ok(camps)
    }

    fn load_victims(&self) -> Result<Victims, StoreError> {
        let stored =
            self.read_collection::<StoredVictim>(RecordKind::Victims, |v| v.victim_id.clone())?;

        let mut victims = Victims::with_capacity(stored.len());
        for (id, record) in stored {
            let upgrade = upgrade_victim(id.clone(), record)?;
            if !upgrade.renamed.is_empty() {
                tracing::warn!(victim = %id, legacy_keys = ?upgrade.renamed, "Upgraded legacy victim fields");
            }
            if let Some(health) = &upgrade.unknown_health {
                tracing::warn!(victim = %id, health = %health, "Unknown health, loading victim as normal");
            }
            victims.insert(id, upgrade.victim);
        }
        Ok(victims)
    }

    fn save_camps(&self, camps: &Camps) -> Result<(), StoreError> {
        let records: IndexMap<&str, CampRecord<'_>> = camps
            .iter()
            .map(|(id, camp)| (id.as_str(), CampRecord::from(camp)))
            .collect();
        self.write_collection(RecordKind::Camps, &records)
    }

    fn save_victims(&self, victims: &Victims) -> Result<(), StoreError> {
        let records: IndexMap<&str, VictimRecord<'_>> = victims
            .iter()
            .map(|(id, victim)| (id.as_str(), VictimRecord::from(victim)))
            .collect();
        self.write_collection(RecordKind::Victims, &records)
    }

    fn describe(&self) -> String {
        format!(
            "{} + {}",
            self.camps_path.display(),
            self.victims_path.display()
        )
    }
}

/// Four-space indented JSON, matching files written by earlier desk versions.
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
