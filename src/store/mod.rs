//! # Entity Store
//!
//! Volatile, in-process keyed storage for one entity type.
//!
//! Each resource family gets its own [`Store`] instance, constructed once at
//! process start and shared by reference through the application state. Data
//! does not survive a restart and concurrent writers get last-write-wins
//! semantics; neither is a supported contract beyond that.

pub mod id;

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Absence of a record is never an error here; lookups signal it with
/// `Option`/`bool` and the caller decides what that means.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock
    #[error("store lock poisoned")]
    Poisoned,
}

/// A record that can live in a [`Store`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Validated creation payload: every required field, already typed.
    type Draft;

    /// Partial-update payload: every mutable field optional, no id.
    type Patch;

    /// Assemble a record from a generated id and a draft.
    fn build(id: String, draft: Self::Draft) -> Self;

    /// The record's id.
    fn id(&self) -> &str;

    /// Shallow-merge a patch over this record: present fields overwrite,
    /// absent fields are retained. The id is not part of the patch and
    /// never changes.
    fn apply(&mut self, patch: Self::Patch);
}

/// In-memory keyed collection for one entity type.
pub struct Store<T: Entity> {
    records: RwLock<HashMap<String, T>>,
}

impl<T: Entity> Store<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create a record: assign a fresh id, store, and return the stored copy.
    ///
    /// Field validation is the caller's job; a `Draft` is assumed complete.
    pub fn create(&self, draft: T::Draft) -> StoreResult<T> {
        let record = T::build(id::next_id(), draft);
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    /// Snapshot of all records. Order is store-defined, not a contract.
    pub fn find_all(&self) -> StoreResult<Vec<T>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }

    /// Look up a record by id. Absence is `None`, never an error.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(id).cloned())
    }

    /// Linear filter over all records. Scoped routes compose their
    /// parent-id equality constraints here; no match is an empty vec.
    pub fn find_where(&self, pred: impl Fn(&T) -> bool) -> StoreResult<Vec<T>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().filter(|r| pred(r)).cloned().collect())
    }

    /// Merge a patch over the record with the given id and return the
    /// updated copy, or `None` when the id is absent.
    pub fn update(&self, id: &str, patch: T::Patch) -> StoreResult<Option<T>> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get_mut(id).map(|record| {
            record.apply(patch);
            record.clone()
        }))
    }

    /// Remove the record with the given id. Idempotent: deleting an absent
    /// id is not an error, the return value just reports whether anything
    /// was removed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.remove(id).is_some())
    }

    pub fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Entity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}
