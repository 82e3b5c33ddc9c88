use std::fmt;

/// Position of an entity in its pool.
///
/// Ids are dense indices and are not stable: deleting one entity can move
/// another into the freed slot. Use an [`EntitySlug`] for stable references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable, human-readable entity name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntitySlug(String);

impl EntitySlug {
    /// Creates a slug.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntitySlug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntitySlug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntitySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pool slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub(super) id: EntityId,
    pub(super) slug: EntitySlug,
    pub(super) active: bool,
}

impl Entity {
    /// Current slot of the entity.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Stable name of the entity.
    #[must_use]
    pub fn slug(&self) -> &EntitySlug {
        &self.slug
    }

    /// `false` once deleted, or before the slot was ever used.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
