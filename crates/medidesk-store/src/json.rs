//! JSON-file implementation of `Repository`.
//!
//! Each collection is one pretty-printed JSON array in the data directory,
//! named after `Record::COLLECTION` (`appointments.json`, `patients.json`,
//! ...). The whole array is loaded on open and rewritten after every
//! mutation, via a temporary file renamed over the original so a crash mid
//! write never leaves a truncated file behind.
//!
//! A missing file is created from the seed records on first open.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use tracing::{debug, info};

use medidesk_contracts::{
    error::{DeskError, DeskResult},
    record::Record,
};
use medidesk_core::traits::Repository;

use crate::memory::replace_in_place;

/// A repository persisted as a JSON array on disk.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    records: Mutex<Vec<T>>,
}

impl<T: Record> JsonFileRepository<T> {
    /// Open `<dir>/<collection>.json`, writing `seed` to it if it does not
    /// exist yet. `dir` is created when missing.
    pub fn open(dir: &Path, seed: Vec<T>) -> DeskResult<Self> {
        fs::create_dir_all(dir).map_err(|e| DeskError::StorageFailed {
            reason: format!("failed to create data directory '{}': {}", dir.display(), e),
        })?;

        let path = dir.join(format!("{}.json", T::COLLECTION));
        let records = if path.exists() {
            let records = read_records(&path)?;
            debug!(kind = T::KIND, path = %path.display(), count = records.len(), "collection loaded");
            records
        } else {
            write_records(&path, &seed)?;
            info!(kind = T::KIND, path = %path.display(), count = seed.len(), "collection seeded");
            seed
        };

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> DeskResult<MutexGuard<'_, Vec<T>>> {
        self.records.lock().map_err(|e| DeskError::StorageFailed {
            reason: format!("{} store lock poisoned: {}", T::KIND, e),
        })
    }
}

impl<T: Record> Repository<T> for JsonFileRepository<T> {
    fn all(&self) -> DeskResult<Vec<T>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> DeskResult<Option<T>> {
        Ok(self.lock()?.iter().find(|r| r.record_id() == id).cloned())
    }

    /// Appends and flushes. The in-memory copy only changes once the file
    /// write succeeded.
    fn insert(&self, record: T) -> DeskResult<()> {
        let mut records = self.lock()?;
        let mut next = records.clone();
        next.push(record);
        write_records(&self.path, &next)?;
        *records = next;
        Ok(())
    }

    fn replace(&self, record: T) -> DeskResult<T> {
        let mut records = self.lock()?;
        let mut next = records.clone();
        let previous = replace_in_place(&mut next, record)?;
        write_records(&self.path, &next)?;
        *records = next;
        Ok(previous)
    }

    fn len(&self) -> DeskResult<usize> {
        Ok(self.lock()?.len())
    }
}

fn read_records<T: Record>(path: &Path) -> DeskResult<Vec<T>> {
    let contents = fs::read_to_string(path).map_err(|e| DeskError::StorageFailed {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    serde_json::from_str(&contents).map_err(|e| DeskError::StorageFailed {
        reason: format!("failed to parse '{}': {}", path.display(), e),
    })
}

fn write_records<T: Record>(path: &Path, records: &[T]) -> DeskResult<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| DeskError::StorageFailed {
        reason: format!("failed to serialize {}: {}", T::COLLECTION, e),
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| DeskError::StorageFailed {
        reason: format!("failed to write '{}': {}", tmp.display(), e),
    })?;
    fs::rename(&tmp, path).map_err(|e| DeskError::StorageFailed {
        reason: format!("failed to replace '{}': {}", path.display(), e),
    })?;

    debug!(kind = T::KIND, path = %path.display(), count = records.len(), "collection flushed");
    Ok(())
}
