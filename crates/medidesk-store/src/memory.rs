//! In-memory implementation of `Repository`.
//!
//! `InMemoryRepository` keeps records in a `Vec` behind an `Arc<Mutex<_>>`.
//! Cloning the repository clones the handle, not the data: every clone sees
//! the same collection, the way every screen of the console shares one
//! dataset. Nothing survives a restart.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use medidesk_contracts::{
    error::{DeskError, DeskResult},
    record::Record,
};
use medidesk_core::traits::Repository;

/// A process-local, shared, ordered collection.
pub struct InMemoryRepository<T> {
    pub(crate) records: Arc<Mutex<Vec<T>>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// A repository pre-filled with `records`, kept in the given order.
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn lock(&self) -> DeskResult<MutexGuard<'_, Vec<T>>> {
        self.records.lock().map_err(|e| DeskError::StorageFailed {
            reason: format!("{} store lock poisoned: {}", T::KIND, e),
        })
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn all(&self) -> DeskResult<Vec<T>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> DeskResult<Option<T>> {
        Ok(self.lock()?.iter().find(|r| r.record_id() == id).cloned())
    }

    fn insert(&self, record: T) -> DeskResult<()> {
        let mut records = self.lock()?;
        debug!(kind = T::KIND, id = %record.record_id(), "record inserted");
        records.push(record);
        Ok(())
    }

    fn replace(&self, record: T) -> DeskResult<T> {
        let mut records = self.lock()?;
        let previous = replace_in_place(&mut records, record)?;
        debug!(kind = T::KIND, id = %previous.record_id(), "record replaced");
        Ok(previous)
    }

    fn len(&self) -> DeskResult<usize> {
        Ok(self.lock()?.len())
    }
}

/// Swap `record` into the slot holding the same id and return the old value.
pub(crate) fn replace_in_place<T: Record>(records: &mut [T], record: T) -> DeskResult<T> {
    let slot = records
        .iter_mut()
        .find(|r| r.record_id() == record.record_id())
        .ok_or_else(|| DeskError::NotFound {
            kind: T::KIND,
            id: record.record_id().to_string(),
        })?;
    Ok(std::mem::replace(slot, record))
}
