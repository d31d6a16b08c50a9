//! The storage seam.
//!
//! Screens never touch a collection directly; they go through a
//! `Repository`. The in-memory and JSON-file implementations live in
//! `medidesk-store` and are interchangeable behind `Box<dyn Repository<T>>`.

use medidesk_contracts::{error::DeskResult, record::Record};

/// An ordered collection of records of one kind.
///
/// Order is insertion order and is part of the contract: `replace` keeps a
/// record at its position, and `all` returns records in that order.
pub trait Repository<T: Record>: Send + Sync {
    /// Every record, in insertion order.
    fn all(&self) -> DeskResult<Vec<T>>;

    /// The record whose `record_id()` equals `id`.
    fn get(&self, id: &str) -> DeskResult<Option<T>>;

    /// Append a record. Ids are not checked for uniqueness.
    fn insert(&self, record: T) -> DeskResult<()>;

    /// Overwrite the record with the same id in place and return the old one.
    ///
    /// Returns `DeskError::NotFound` when no record carries that id. Exactly
    /// one element changes; every other element keeps its content and position.
    fn replace(&self, record: T) -> DeskResult<T>;

    fn len(&self) -> DeskResult<usize> {
        Ok(self.all()?.len())
    }

    fn is_empty(&self) -> DeskResult<bool> {
        Ok(self.len()? == 0)
    }
}
