//! Slot-based entity storage
//!
//! A pool owns every instance of one entity kind. Destroying an entity only
//! clears its active flag; the slot is reused by the next admission and the
//! pool compacts itself once dead slots outnumber live ones.

use serde::{Deserialize, Serialize};

/// An entity that can live in a `Pool`
pub trait Slot {
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
}

/// Dead slots tolerated before compaction kicks in
const MIN_DEAD_FOR_COMPACTION: usize = 16;

/// Growable pool with an active flag per slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> FromIterator<T> for Pool<T> {
    /// Every item gets its own slot, live or not
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T: Slot> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a new entity, reusing the first dead slot if any.
    /// Returns the slot index.
    pub fn admit(&mut self, entity: T) -> usize {
        match self.slots.iter().position(|s| !s.is_active()) {
            Some(index) => {
                self.slots[index] = entity;
                index
            }
            None => {
                self.slots.push(entity);
                self.slots.len() - 1
            }
        }
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    /// True when no entity is live
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|s| s.is_active())
    }

    /// Number of slots, live or dead
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|s| s.is_active())
    }

    /// Every slot including dead ones (renderers must check the flag)
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Drop all dead slots now
    pub fn compact(&mut self) {
        self.slots.retain(|s| s.is_active());
    }

    /// Compact once dead slots dominate the pool
    pub fn maintain(&mut self) {
        let live = self.len();
        let dead = self.slots.len() - live;
        if dead >= MIN_DEAD_FOR_COMPACTION && dead > live {
            log::trace!("Compacting pool: {} live, {} dead", live, dead);
            self.compact();
        }
    }

    /// Remove every entity unconditionally
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
