//! Generic repository over a [`JsonStore`].
//!
//! One instance per service. Every operation takes the single-writer lock
//! for the whole load-mutate-save cycle, so concurrent requests within one
//! process cannot lose writes or hand out colliding ids.

use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use rand::seq::SliceRandom;
use serde::{de::DeserializeOwned, Serialize};

use crate::{error::StoreError, file_store::JsonStore, records::Record};

pub struct Repository<R> {
    store: JsonStore<R>,
    lock: Mutex<()>,
}

impl<R> Repository<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    pub fn new(store: JsonStore<R>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonStore::new(path))
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every record, insertion order preserved.
    pub fn all(&self) -> Result<Vec<R>, StoreError> {
        let _guard = self.guard();
        self.store.load_all()
    }

    /// A uniformly random record, or `None` when the store is empty.
    pub fn random(&self) -> Result<Option<R>, StoreError> {
        let _guard = self.guard();
        let records = self.store.load_all()?;
        Ok(records.choose(&mut rand::thread_rng()).cloned())
    }

    /// First record matching the predicate, scanning in insertion order.
    pub fn find<F>(&self, mut matches: F) -> Result<Option<R>, StoreError>
    where
        F: FnMut(&R) -> bool,
    {
        let _guard = self.guard();
        Ok(self.store.load_all()?.into_iter().find(|r| matches(r)))
    }

    pub fn find_by_id(&self, id: u64) -> Result<Option<R>, StoreError> {
        self.find(|record| record.id() == id)
    }

    /// Builds a record with the next free id, appends it, and persists.
    pub fn insert<F>(&self, build: F) -> Result<R, StoreError>
    where
        F: FnOnce(u64) -> R,
    {
        let _guard = self.guard();
        let mut records = self.store.load_all()?;

        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        let record = build(next_id);

        records.push(record.clone());
        self.store.save_all(&records)?;

        Ok(record)
    }

    /// Mutates the record with the given id in place and persists.
    ///
    /// Returns `None`, leaving the file untouched, when the id is unknown.
    pub fn update<F>(&self, id: u64, apply: F) -> Result<Option<R>, StoreError>
    where
        F: FnOnce(&mut R),
    {
        let _guard = self.guard();
        let mut records = self.store.load_all()?;

        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        apply(record);
        let updated = record.clone();
        self.store.save_all(&records)?;

        Ok(Some(updated))
    }
}
