//! Generic entity store
//!
//! One [`EntityStore`] owns the canonical, insertion-ordered collection for a
//! single entity kind and provides deterministic CRUD and query operations
//! over it. The composition root creates one store per kind at startup, seeds
//! it, and passes it by reference to whatever consumes it — record state is
//! never global.
//!
//! All operations are synchronous and free of I/O. Mutations follow a strict
//! validate-then-commit discipline: the candidate record is fully validated
//! before the collection changes, so a failed operation leaves the store
//! exactly as it was.

use crate::error::StoreError;
use crate::identifiers::{next_raw_id, SequentialId};
use crate::validation::ValidationReport;
use std::collections::HashSet;

/// A record kind managed by an [`EntityStore`].
///
/// Implementors connect three types: the stored record itself, the `Draft`
/// submitted to create one (no id yet), and the `Patch` merged over one to
/// update it. Patch types carry no id field, which makes record ids immutable
/// by construction.
pub trait Record: Clone {
    /// Strongly-typed identifier for this record kind.
    type Id: SequentialId;

    /// User-supplied field set for creating a record, prior to id assignment.
    type Draft;

    /// Partial field set merged over an existing record.
    type Patch;

    /// Entity name used in error messages, e.g. `"client"`.
    const ENTITY: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Builds a record from a draft, applying entity-specific defaults.
    ///
    /// Called with the id the store assigned; the result is validated before
    /// it is admitted to the collection.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Merges a patch into this record. Fields absent from the patch keep
    /// their current values.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Validates the full record against its field rules.
    fn validate(&self) -> ValidationReport;
}

/// In-memory collection manager for one entity kind.
///
/// Records are kept in insertion order; queries never reorder or mutate the
/// collection. New ids are assigned one greater than the current maximum id
/// (or 1 for an empty store), so an id freed by a removal below the maximum
/// is never reused.
///
/// # Examples
///
/// ```rust,ignore
/// let mut clients: EntityStore<Client> = EntityStore::new();
/// let created = clients.add(draft)?;
/// assert_eq!(created.id(), ClientId::new(1));
///
/// let renamed = clients.update(created.id(), patch)?;
/// let removed = clients.remove(renamed.id())?;
/// assert!(clients.find(removed.id()).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EntityStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with seed records.
    ///
    /// Seed ids are taken as-is; later additions continue from their maximum.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if two seed records share an id.
    pub fn with_records(records: Vec<T>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(StoreError::conflict(format!(
                    "duplicate {} id {} in seed data",
                    T::ENTITY,
                    record.id()
                )));
            }
        }
        Ok(Self { records })
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when a record with the given id exists.
    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    /// The id the next successful `add` will assign: one greater than the
    /// current maximum, or the first id when the store is empty.
    pub fn next_id(&self) -> T::Id {
        T::Id::from_raw(next_raw_id(self.records.iter().map(|r| r.id().raw())))
    }

    /// Returns the record with the given id, or `None`.
    ///
    /// This is the non-failing read used by detail views; callers render a
    /// deterministic placeholder when the record is absent.
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Validates a draft and appends the resulting record.
    ///
    /// Assigns the next sequential id, applies the entity's defaults via
    /// [`Record::from_draft`], and validates the candidate in full before it
    /// is admitted.
    ///
    /// # Arguments
    ///
    /// * `draft` - User-supplied field set, without an id
    ///
    /// # Returns
    ///
    /// A reference to the created record, including its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when required fields are missing or
    /// invalid; the collection is left unchanged.
    pub fn add(&mut self, draft: T::Draft) -> Result<&T, StoreError> {
        let candidate = T::from_draft(self.next_id(), draft);
        candidate.validate().into_result()?;

        let idx = self.records.len();
        self.records.push(candidate);
        Ok(&self.records[idx])
    }

    /// Merges a patch into an existing record.
    ///
    /// The patch is applied to a copy first; only when the merged record
    /// passes validation is it committed, so a failing update never leaves a
    /// partial mutation. Fields absent from the patch keep their values, and
    /// the id cannot change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is absent, or
    /// [`StoreError::Validation`] when the merged record breaks a field rule.
    pub fn update(&mut self, id: T::Id, patch: T::Patch) -> Result<&T, StoreError> {
        self.commit(id, |record| record.apply_patch(patch))
    }

    /// Applies an arbitrary mutation to an existing record under the same
    /// validate-then-commit discipline as [`update`](Self::update).
    ///
    /// Used by entity-specific transitions such as marking a payment paid or
    /// attaching an owned document. The closure must preserve the record id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is absent, or
    /// [`StoreError::Validation`] when the mutated record breaks a field rule.
    pub fn modify(&mut self, id: T::Id, f: impl FnOnce(&mut T)) -> Result<&T, StoreError> {
        self.commit(id, f)
    }

    /// Removes the record with the given id.
    ///
    /// # Returns
    ///
    /// The removed record, so confirmation UIs can present it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is absent.
    pub fn remove(&mut self, id: T::Id) -> Result<T, StoreError> {
        let pos = self
            .position(id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;
        Ok(self.records.remove(pos))
    }

    /// Lazily yields records matching a predicate, in insertion order.
    ///
    /// The sequence borrows the store and restarts from the beginning each
    /// time it is created; listing never mutates the collection, so the same
    /// predicate over an unchanged store yields an identical sequence.
    pub fn list<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a T> + 'a
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.records.iter().filter(move |record| predicate(record))
    }

    /// Iterates over every record in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn commit(&mut self, id: T::Id, mutate: impl FnOnce(&mut T)) -> Result<&T, StoreError> {
        let pos = self
            .position(id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;

        let mut candidate = self.records[pos].clone();
        mutate(&mut candidate);
        candidate.validate().into_result()?;

        self.records[pos] = candidate;
        Ok(&self.records[pos])
    }
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Record> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
