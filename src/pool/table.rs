use std::collections::HashMap;

use tracing::trace;

use super::{Entity, EntityId, EntityPool, EntitySlug, IdChange, PoolParams};
use crate::error::PoolError;

/// Slug-to-id lookup kept in step with an [`EntityPool`].
///
/// Ids go stale whenever the pool swaps on delete. Feed every changelist
/// returned by [`EntityPool::delete`] to [`SlugIndex::apply`] before the next
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct SlugIndex {
    ids: HashMap<EntitySlug, EntityId>,
}

impl SlugIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every active entity of `pool`.
    #[must_use]
    pub fn rebuild(pool: &EntityPool) -> Self {
        let ids = pool
            .active_entities()
            .iter()
            .map(|entity| (entity.slug().clone(), entity.id()))
            .collect();
        Self { ids }
    }

    /// Current id of the entity named `slug`.
    #[must_use]
    pub fn get(&self, slug: &EntitySlug) -> Option<EntityId> {
        self.ids.get(slug).copied()
    }

    /// Maps `slug` to `id`, replacing any previous mapping.
    pub fn insert(&mut self, slug: EntitySlug, id: EntityId) {
        self.ids.insert(slug, id);
    }

    /// Drops `slug`, returning the id it pointed at.
    pub fn remove(&mut self, slug: &EntitySlug) -> Option<EntityId> {
        self.ids.remove(slug)
    }

    /// Re-points every moved slug at its new id.
    pub fn apply(&mut self, changes: &[IdChange]) {
        for change in changes {
            trace!(slug = %change.slug, from = %change.from, to = %change.to, "reindex");
            self.ids.insert(change.slug.clone(), change.to);
        }
    }

    /// Number of indexed slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no slug is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// An [`EntityPool`] addressed by slug.
///
/// Creating a slug that is already present repoints the index at the new
/// entity; the older one stays reachable only by id.
#[derive(Debug, Clone)]
pub struct EntityTable {
    pool: EntityPool,
    index: SlugIndex,
}

impl EntityTable {
    /// Wraps `pool`, indexing the entities already active in it.
    #[must_use]
    pub fn new(pool: EntityPool) -> Self {
        let index = SlugIndex::rebuild(&pool);
        Self { pool, index }
    }

    /// Creates a table over a fresh pool built from `params`.
    #[must_use]
    pub fn with_params(params: PoolParams) -> Self {
        Self::new(EntityPool::new(params))
    }

    /// Creates an entity named `slug`. `None` when the pool is full.
    pub fn create(&mut self, slug: impl Into<EntitySlug>) -> Option<EntityId> {
        let slug = slug.into();
        let id = self.pool.create_named(slug.clone())?;
        self.index.insert(slug, id);
        Some(id)
    }

    /// Active entity named `slug`.
    #[must_use]
    pub fn find(&self, slug: &EntitySlug) -> Option<&Entity> {
        let id = self.index.get(slug)?;
        self.pool
            .element_at(id)
            .filter(|entity| entity.is_active() && entity.slug() == slug)
    }

    /// Deletes entity `id` and reindexes whatever the pool moved.
    ///
    /// # Errors
    ///
    /// Returns the [`PoolError`] from [`EntityPool::delete`]; the table is
    /// unchanged in that case.
    pub fn delete(&mut self, id: EntityId) -> Result<(), PoolError> {
        let slug = self
            .pool
            .element_at(id)
            .filter(|entity| entity.is_active())
            .map(|entity| entity.slug().clone());
        let changes = self.pool.delete(id)?;

        if let Some(slug) = slug {
            if self.index.get(&slug) == Some(id) {
                self.index.remove(&slug);
            }
        }
        self.index.apply(&changes);
        Ok(())
    }

    /// Deletes the entity named `slug`, if any. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns the [`PoolError`] from [`EntityPool::delete`].
    pub fn delete_slug(&mut self, slug: &EntitySlug) -> Result<bool, PoolError> {
        match self.find(slug).map(Entity::id) {
            Some(id) => self.delete(id).map(|()| true),
            None => Ok(false),
        }
    }

    /// Active entities, in slot order.
    #[must_use]
    pub fn active_entities(&self) -> &[Entity] {
        self.pool.active_entities()
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    /// The slug index, always in step with the pool.
    #[must_use]
    pub fn index(&self) -> &SlugIndex {
        &self.index
    }
}

impl Default for EntityTable {
    fn default() -> Self {
        Self::new(EntityPool::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn metroid() -> EntityTable {
        let mut table = EntityTable::new(EntityPool::with_capacity(3));
        table.create("samus").unwrap();
        table.create("ridley").unwrap();
        table.create("mother-brain").unwrap();
        table
    }

    #[test]
    fn create_when_full_returns_none() {
        let mut table = EntityTable::new(EntityPool::with_capacity(1));
        assert_eq!(table.create("samus"), Some(EntityId(0)));
        assert_eq!(table.create("ridley"), None);
        assert!(table.find(&"ridley".into()).is_none());
    }

    #[test]
    fn find_by_slug() {
        let table = metroid();
        let ridley = table.find(&"ridley".into()).unwrap();
        assert_eq!(ridley.id(), EntityId(1));
        assert!(ridley.is_active());
        assert!(table.find(&"kraid".into()).is_none());
    }

    #[test]
    fn delete_keeps_moved_slug_resolvable() {
        let mut table = metroid();
        table.delete(EntityId(1)).unwrap();

        assert!(table.find(&"ridley".into()).is_none());
        let mother_brain = table.find(&"mother-brain".into()).unwrap();
        assert_eq!(mother_brain.id(), EntityId(1));
        assert_eq!(table.find(&"samus".into()).unwrap().id(), EntityId(0));
        assert_eq!(table.index().len(), 2);
    }

    #[test]
    fn delete_last_entity() {
        let mut table = metroid();
        table.delete(EntityId(2)).unwrap();

        assert!(table.find(&"mother-brain".into()).is_none());
        assert_eq!(table.active_entities().len(), 2);
        assert_eq!(table.find(&"ridley".into()).unwrap().id(), EntityId(1));
    }

    #[test]
    fn freed_slot_takes_new_slug() {
        let mut table = EntityTable::new(EntityPool::with_capacity(1));
        let id = table.create("samus").unwrap();
        table.delete(id).unwrap();

        assert_eq!(table.create("ridley"), Some(EntityId(0)));
        assert!(table.find(&"samus".into()).is_none());
        assert_eq!(table.find(&"ridley".into()).unwrap().id(), EntityId(0));
    }

    #[test]
    fn failed_delete_leaves_table_alone() {
        let mut table = metroid();
        assert_eq!(
            table.delete(EntityId(5)),
            Err(PoolError::OutOfRange {
                id: EntityId(5),
                capacity: 3
            })
        );
        table.delete(EntityId(0)).unwrap();
        assert_eq!(
            table.delete(EntityId(2)),
            Err(PoolError::Inactive(EntityId(2)))
        );
        assert_eq!(table.active_entities().len(), 2);
        assert_eq!(table.find(&"mother-brain".into()).unwrap().id(), EntityId(0));
    }

    #[test]
    fn delete_by_slug() {
        let mut table = metroid();
        assert!(table.delete_slug(&"samus".into()).unwrap());
        assert!(!table.delete_slug(&"samus".into()).unwrap());
        assert_eq!(table.find(&"mother-brain".into()).unwrap().id(), EntityId(0));
    }

    #[test]
    fn unapplied_changes_leave_index_stale() {
        let mut pool = EntityPool::with_capacity(3);
        pool.create_named("samus".into()).unwrap();
        pool.create_named("ridley".into()).unwrap();
        pool.create_named("mother-brain".into()).unwrap();
        let mut index = SlugIndex::rebuild(&pool);

        let changes = pool.delete(EntityId(0)).unwrap();
        let stale = index.get(&"mother-brain".into()).unwrap();
        assert_eq!(stale, EntityId(2));
        assert!(!pool.element_at(stale).unwrap().is_active());

        index.remove(&"samus".into());
        index.apply(&changes);
        let id = index.get(&"mother-brain".into()).unwrap();
        assert_eq!(pool.element_at(id).unwrap().slug().as_str(), "mother-brain");
    }

    #[test]
    fn table_indexes_existing_pool() {
        let mut pool = EntityPool::with_capacity(2);
        pool.create_named("samus".into()).unwrap();
        let table = EntityTable::new(pool);
        assert_eq!(table.find(&"samus".into()).unwrap().id(), EntityId(0));
        assert_eq!(table.pool().len(), 1);
    }

    #[test]
    fn default_table_uses_default_pool() {
        let table = EntityTable::default();
        assert_eq!(table.pool().capacity(), 100);
        assert!(table.index().is_empty());
    }
}
