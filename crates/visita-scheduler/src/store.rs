//! Record store seam.
//!
//! Persistence is an abstract key-value record store with add/update/
//! delete/get-all semantics keyed by the visit id. The in-memory
//! implementation backs tests and the CLI; a real backend plugs in behind
//! the same trait.

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use crate::model::Visit;

/// Record store failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("visit record not found: {0}")]
    NotFound(Uuid),
    #[error("visit record already exists: {0}")]
    Duplicate(Uuid),
}

/// Key-value persistence for visit records.
pub trait RecordStore {
    /// Inserts a new record.
    ///
    /// ## Errors
    /// Returns [`StoreError::Duplicate`] if a record with the same id exists.
    fn add(&mut self, visit: Visit) -> Result<(), StoreError>;

    /// Replaces an existing record.
    ///
    /// ## Errors
    /// Returns [`StoreError::NotFound`] if no record has the visit's id.
    fn update(&mut self, visit: Visit) -> Result<(), StoreError>;

    /// Removes a record.
    ///
    /// ## Errors
    /// Returns [`StoreError::NotFound`] if no record has the id.
    fn delete(&mut self, id: Uuid) -> Result<(), StoreError>;

    /// Looks up one record.
    fn get(&self, id: Uuid) -> Option<Visit>;

    /// Returns every record, ordered by id.
    fn get_all(&self) -> Vec<Visit>;
}

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<Uuid, Visit>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn add(&mut self, visit: Visit) -> Result<(), StoreError> {
        if self.records.contains_key(&visit.id) {
            return Err(StoreError::Duplicate(visit.id));
        }
        self.records.insert(visit.id, visit);
        Ok(())
    }

    fn update(&mut self, visit: Visit) -> Result<(), StoreError> {
        if !self.records.contains_key(&visit.id) {
            return Err(StoreError::NotFound(visit.id));
        }
        self.records.insert(visit.id, visit);
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn get(&self, id: Uuid) -> Option<Visit> {
        self.records.get(&id).cloned()
    }

    fn get_all(&self) -> Vec<Visit> {
        self.records.values().cloned().collect()
    }
}
