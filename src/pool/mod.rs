//! Fixed-capacity entity allocation.
//!
//! [`EntityPool`] keeps active entities packed at the front of a
//! preallocated array. Deleting swaps the last active entity into the freed
//! slot, which changes that entity's id. Every delete returns the resulting
//! [`IdChange`]s, and any index keyed by something other than the id (see
//! [`SlugIndex`]) must apply them before it is read again.

mod entity;
mod table;

pub use entity::{Entity, EntityId, EntitySlug};
pub use table::{EntityTable, SlugIndex};

use tracing::{debug, warn};

use crate::error::PoolError;

/// Parameters controlling pool allocation.
#[derive(Debug, Clone)]
pub struct PoolParams {
    /// Number of preallocated slots.
    pub capacity: usize,
    /// Prefix for the placeholder slugs of never-used slots.
    pub slug_prefix: String,
}

impl Default for PoolParams {
    fn default() -> Self {
        Self {
            capacity: 100,
            slug_prefix: "e".into(),
        }
    }
}

/// An entity whose id changed because another entity was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdChange {
    /// Slug of the entity that moved.
    pub slug: EntitySlug,
    /// Id before the move.
    pub from: EntityId,
    /// Id after the move.
    pub to: EntityId,
}

/// Dense, fixed-capacity entity allocator.
///
/// Slots `[0, len)` are exactly the active entities. Allocation and deletion
/// are O(1).
#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Entity>,
    first_inactive: usize,
}

impl EntityPool {
    /// Creates a pool with every slot inactive.
    #[must_use]
    pub fn new(params: PoolParams) -> Self {
        let slots = (0..params.capacity)
            .map(|i| Entity {
                id: EntityId(i),
                slug: EntitySlug::new(format!("{}{i}", params.slug_prefix)),
                active: false,
            })
            .collect();
        Self {
            slots,
            first_inactive: 0,
        }
    }

    /// Creates a pool of `capacity` slots with default naming.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(PoolParams {
            capacity,
            ..PoolParams::default()
        })
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of active entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.first_inactive
    }

    /// Returns `true` if no entity is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_inactive == 0
    }

    /// Returns `true` if every slot is active.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_inactive >= self.slots.len()
    }

    /// Active entities, in slot order.
    #[must_use]
    pub fn active_entities(&self) -> &[Entity] {
        &self.slots[..self.first_inactive]
    }

    /// Slot `id`, active or not.
    #[must_use]
    pub fn element_at(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.0)
    }

    /// Activates the first free slot with an empty slug. `None` when full.
    pub fn create(&mut self) -> Option<EntityId> {
        self.create_named(EntitySlug::default())
    }

    /// Activates the first free slot under `slug`. `None` when full.
    pub fn create_named(&mut self, slug: EntitySlug) -> Option<EntityId> {
        if self.is_full() {
            warn!(capacity = self.capacity(), %slug, "entity pool is full");
            return None;
        }

        let id = EntityId(self.first_inactive);
        debug!(%id, %slug, "created entity");
        self.slots[id.0] = Entity {
            id,
            slug,
            active: true,
        };
        self.first_inactive += 1;
        Some(id)
    }

    /// Deletes the active entity `id`.
    ///
    /// The last active entity moves into the freed slot; the returned list
    /// records that move, and is empty when `id` was already last.
    ///
    /// # Errors
    ///
    /// - [`PoolError::OutOfRange`] if `id` is not below the capacity.
    /// - [`PoolError::Inactive`] if the slot holds no active entity.
    pub fn delete(&mut self, id: EntityId) -> Result<Vec<IdChange>, PoolError> {
        if id.0 >= self.capacity() {
            return Err(PoolError::OutOfRange {
                id,
                capacity: self.capacity(),
            });
        }
        if id.0 >= self.first_inactive {
            return Err(PoolError::Inactive(id));
        }

        self.slots[id.0].active = false;
        self.first_inactive -= 1;
        let last = self.first_inactive;
        self.slots.swap(id.0, last);
        self.slots[last].id = EntityId(last);
        debug!(%id, slug = %self.slots[last].slug, "deleted entity");

        if id.0 == last {
            return Ok(Vec::new());
        }

        let moved = &mut self.slots[id.0];
        moved.id = id;
        debug!(slug = %moved.slug, from = last, to = %id, "entity moved");
        Ok(vec![IdChange {
            slug: moved.slug.clone(),
            from: EntityId(last),
            to: id,
        }])
    }
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new(PoolParams::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn create_when_full_returns_none() {
        init_tracing();
        let mut pool = EntityPool::with_capacity(1);
        assert!(pool.create().is_some());
        assert!(pool.is_full());
        assert!(pool.create().is_none());
    }

    #[test]
    fn create_with_room_returns_first_slot() {
        let mut pool = EntityPool::with_capacity(1);
        assert_eq!(pool.create(), Some(EntityId(0)));
        assert!(pool.element_at(EntityId(0)).unwrap().is_active());
    }

    #[test]
    fn slot_is_reused_with_fresh_identity() {
        let mut pool = EntityPool::with_capacity(1);
        let first = pool.create_named("first".into()).unwrap();
        assert_eq!(first, EntityId(0));

        pool.delete(first).unwrap();
        assert!(pool.is_empty());

        let second = pool.create().unwrap();
        assert_eq!(second, EntityId(0));
        let entity = pool.element_at(second).unwrap();
        assert_eq!(entity.slug(), &EntitySlug::default());
        assert_ne!(entity.slug(), &EntitySlug::from("first"));
    }

    #[test]
    fn unused_slots_get_placeholder_names() {
        let pool = EntityPool::new(PoolParams {
            capacity: 3,
            slug_prefix: "slot".into(),
        });
        assert_eq!(pool.capacity(), 3);
        assert!(pool.active_entities().is_empty());
        let entity = pool.element_at(EntityId(2)).unwrap();
        assert_eq!(entity.slug().as_str(), "slot2");
        assert!(!entity.is_active());
        assert!(pool.element_at(EntityId(3)).is_none());
    }

    #[test]
    fn delete_moves_last_entity_into_gap() {
        init_tracing();
        let mut pool = EntityPool::with_capacity(3);
        pool.create_named("samus".into()).unwrap();
        let ridley = pool.create_named("ridley".into()).unwrap();
        pool.create_named("mother-brain".into()).unwrap();

        let changes = pool.delete(ridley).unwrap();

        assert_eq!(
            changes,
            vec![IdChange {
                slug: "mother-brain".into(),
                from: EntityId(2),
                to: EntityId(1),
            }]
        );
        let active: Vec<&str> = pool
            .active_entities()
            .iter()
            .map(|e| e.slug().as_str())
            .collect();
        assert_eq!(active, vec!["samus", "mother-brain"]);
        assert!(pool
            .active_entities()
            .iter()
            .enumerate()
            .all(|(i, e)| e.id() == EntityId(i)));

        let deleted = pool.element_at(EntityId(2)).unwrap();
        assert_eq!(deleted.slug().as_str(), "ridley");
        assert!(!deleted.is_active());
    }

    #[test]
    fn deleting_last_entity_moves_nothing() {
        let mut pool = EntityPool::with_capacity(2);
        pool.create().unwrap();
        let last = pool.create().unwrap();
        assert!(pool.delete(last).unwrap().is_empty());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn delete_rejects_bad_ids() {
        let mut pool = EntityPool::with_capacity(2);
        pool.create().unwrap();

        assert_eq!(
            pool.delete(EntityId(2)),
            Err(PoolError::OutOfRange {
                id: EntityId(2),
                capacity: 2
            })
        );
        assert_eq!(pool.delete(EntityId(1)), Err(PoolError::Inactive(EntityId(1))));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn default_pool_has_hundred_slots() {
        let pool = EntityPool::default();
        assert_eq!(pool.capacity(), 100);
        assert_eq!(pool.element_at(EntityId(7)).unwrap().slug().as_str(), "e7");
    }
}
