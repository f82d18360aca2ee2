//! Storage capability used by the record services.
//!
//! Services talk to their collection through [`EntityStore`] so they can be exercised against any
//! container. [`InMemoryStore`] is the only backend: a `Vec` kept in insertion order.

/// A domain object with a numeric identity.
pub trait Entity {
    /// Human-readable entity name, used in not-found errors and logs.
    const NAME: &'static str;

    fn id(&self) -> u32;
}

/// Get-by-id, add, remove and list over one entity type.
pub trait EntityStore<T: Entity> {
    fn get(&self, id: u32) -> Option<&T>;

    fn get_mut(&mut self, id: u32) -> Option<&mut T>;

    /// Appends `entity`. Callers guarantee the identifier is not already present.
    fn add(&mut self, entity: T);

    /// Removes and returns the entity with `id`, if present.
    fn remove(&mut self, id: u32) -> Option<T>;

    /// All entities in insertion order.
    fn list(&self) -> &[T];

    fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Highest identifier currently stored.
    fn max_id(&self) -> Option<u32> {
        self.list().iter().map(|item| item.id()).max()
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    items: Vec<T>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn add(&mut self, entity: T) {
        self.items.push(entity);
    }

    fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    fn list(&self) -> &[T] {
        &self.items
    }
}
