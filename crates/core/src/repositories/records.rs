//! Generic record collection shared by the medical record and appointment services.
//!
//! A [`RecordBook`] pairs an [`EntityStore`] with the [`IdAllocator`] for the same entity type.
//! Services keep one behind a mutex and run every operation against it while holding the lock,
//! so identifier allocation and insertion cannot interleave between requests.

use crate::allocator::{IdAllocator, FIRST_ID};
use crate::filter::{self, Criterion};
use crate::storage::{Entity, EntityStore, InMemoryStore};
use crate::{ClinicError, ClinicResult};
use std::collections::HashSet;
use std::marker::PhantomData;

#[derive(Debug)]
pub struct RecordBook<T, S = InMemoryStore<T>> {
    store: S,
    ids: IdAllocator,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S> RecordBook<T, S>
where
    T: Entity + Clone,
    S: EntityStore<T> + Default,
{
    pub fn empty() -> Self {
        Self {
            store: S::default(),
            ids: IdAllocator::new(),
            _entity: PhantomData,
        }
    }
}

impl<T, S> RecordBook<T, S>
where
    T: Entity + Clone,
    S: EntityStore<T>,
{
    /// Wraps a store that may already hold entities; the counter starts past the highest id.
    pub fn new(store: S) -> ClinicResult<Self> {
        let ids = match store.max_id() {
            Some(max) => IdAllocator::starting_at(successor(max)?)?,
            None => IdAllocator::new(),
        };
        Ok(Self {
            store,
            ids,
            _entity: PhantomData,
        })
    }

    /// The identifier the next create will receive.
    pub fn next_id(&self) -> u32 {
        self.ids.peek()
    }

    /// Builds an entity with the allocator and stores it.
    ///
    /// If `build` fails nothing is stored.
    pub fn create_with<F>(&mut self, build: F) -> ClinicResult<T>
    where
        F: FnOnce(&mut IdAllocator) -> ClinicResult<T>,
    {
        let entity = build(&mut self.ids)?;
        self.store.add(entity.clone());
        Ok(entity)
    }

    pub fn get(&self, id: u32) -> ClinicResult<T> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| ClinicError::not_found(T::NAME, id))
    }

    /// Applies `change` to the entity in place and returns the updated copy.
    pub fn update_with<F>(&mut self, id: u32, change: F) -> ClinicResult<T>
    where
        F: FnOnce(&mut T),
    {
        let entity = self
            .store
            .get_mut(id)
            .ok_or_else(|| ClinicError::not_found(T::NAME, id))?;
        change(entity);
        Ok(entity.clone())
    }

    pub fn delete(&mut self, id: u32) -> ClinicResult<T> {
        self.store
            .remove(id)
            .ok_or_else(|| ClinicError::not_found(T::NAME, id))
    }

    pub fn list(&self) -> Vec<T> {
        self.store.list().to_vec()
    }

    pub fn search(&self, criteria: &[Criterion<'_, T>]) -> Vec<T> {
        filter::filter(self.store.list(), criteria)
    }

    /// Checks a batch for [`load`](Self::load) without inserting anything.
    ///
    /// Rejects identifier `0`, identifiers repeated within the batch, and identifiers below
    /// [`next_id`](Self::next_id). Everything below the counter has already been issued or
    /// loaded, so a deleted identifier can never come back through a bulk load.
    pub fn check_load(&self, entities: &[T]) -> ClinicResult<()> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in entities {
            let id = entity.id();
            if id < FIRST_ID {
                return Err(ClinicError::InvalidInput(format!(
                    "{} without an identifier cannot be loaded",
                    T::NAME
                )));
            }
            if id < self.ids.peek() {
                return Err(ClinicError::InvalidInput(format!(
                    "{} identifier {} has already been issued",
                    T::NAME,
                    id
                )));
            }
            if !seen.insert(id) {
                return Err(ClinicError::InvalidInput(format!(
                    "duplicate {} identifier {}",
                    T::NAME,
                    id
                )));
            }
        }
        if let Some(max) = entities.iter().map(|e| e.id()).max() {
            successor(max)?;
        }
        Ok(())
    }

    /// Bulk-inserts entities that already carry identifiers, then resyncs the allocator past
    /// the highest one.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError::InvalidInput` for any batch [`check_load`](Self::check_load)
    /// rejects. Nothing is inserted in that case.
    pub fn load(&mut self, entities: Vec<T>) -> ClinicResult<usize> {
        self.check_load(&entities)?;

        let loaded = entities.len();
        let Some(max) = entities.iter().map(|e| e.id()).max() else {
            return Ok(0);
        };
        let next = successor(max)?;

        for entity in entities {
            self.store.add(entity);
        }
        self.ids.resync(next)?;

        Ok(loaded)
    }
}

fn successor(id: u32) -> ClinicResult<u32> {
    id.checked_add(1)
        .ok_or_else(|| ClinicError::Unexpected("identifier space exhausted".into()))
}
