// In-memory record store primitives.
//
// Every domain repository wraps a Collection: an insertion-ordered,
// lock-guarded Vec of owned entities. Entities are copied in and out by
// value, so a snapshot handed to a caller never observes later mutation.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::core::error::{AppError, Result};

/// Implemented by every entity held in a Collection
pub trait StoredEntity: Clone {
    /// Stable unique id, assigned at construction
    fn id(&self) -> &str;

    /// Human-readable kind used in NotFound messages ("Customer", "Invoice", ...)
    fn kind() -> &'static str;

    /// Bump the entity's updated-at timestamp
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Insertion-ordered in-memory collection with copy-in/copy-out semantics
pub struct Collection<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: StoredEntity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> Collection<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entity and return the stored copy
    pub fn insert(&self, entity: T) -> T {
        let mut rows = self.write();
        rows.push(entity.clone());
        entity
    }

    /// Find an entity by id
    pub fn get(&self, id: &str) -> Option<T> {
        self.read().iter().find(|row| row.id() == id).cloned()
    }

    /// Apply a fallible mutation to the entity with the given id
    ///
    /// The mutation runs against a working copy; the store is only updated
    /// when it succeeds, so a failed mutation leaves the entity untouched.
    pub fn modify(&self, id: &str, apply: impl FnOnce(&mut T) -> Result<()>) -> Result<T> {
        let mut rows = self.write();
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| AppError::not_found(format!("{} {}", T::kind(), id)))?;

        let mut updated = row.clone();
        apply(&mut updated)?;
        updated.touch(Utc::now());
        *row = updated.clone();
        Ok(updated)
    }

    /// Remove an entity by id, returning the removed value
    pub fn remove(&self, id: &str) -> Result<T> {
        let mut rows = self.write();
        let position = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| AppError::not_found(format!("{} {}", T::kind(), id)))?;

        Ok(rows.remove(position))
    }

    /// Defensive copy of the whole collection in insertion order
    pub fn snapshot(&self) -> Vec<T> {
        self.read().clone()
    }

    /// First entity matching a predicate
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.read().iter().find(|row| predicate(row)).cloned()
    }

    /// Whether any entity matches a predicate
    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.read().iter().any(|row| predicate(row))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Replace the entire contents, used when restoring a snapshot
    pub fn replace_all(&self, entities: Vec<T>) {
        *self.write() = entities;
    }
}
