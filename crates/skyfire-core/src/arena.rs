//! Arena module: the entity registry.
//!
//! The Arena is the container for every transient entity in a session
//! (enemies, stars, projectiles of both sides, and effects). It provides:
//! - Entity storage with deterministic iteration order (`BTreeMap`)
//! - Per-collection views derived from each entity's [`EntityTag`]
//! - Entity lifecycle management (spawn/despawn) with render notices
//!
//! # Removal During Traversal
//!
//! Entities are never removed while a traversal borrows the map. Systems
//! collect the ids they want gone during a pass and then call
//! [`Arena::despawn_all`]; every other entity is visited exactly once.
//!
//! # Example
//!
//! ```
//! use skyfire_core::arena::Arena;
//! use skyfire_core::entity::{EntityInner, EntityTag, StarComponents};
//! use glam::Vec3;
//!
//! let mut arena = Arena::new();
//! let star = arena.spawn(EntityInner::Star(StarComponents::new(Vec3::new(0.0, 0.0, -50.0))));
//!
//! assert_eq!(arena.count(EntityTag::Star), 1);
//! arena.despawn(star);
//! assert!(arena.is_empty());
//!
//! // One spawn and one despawn notice are waiting for the renderer.
//! assert_eq!(arena.take_notices().len(), 2);
//! ```

use std::collections::BTreeMap;

use crate::entity::{Entity, EntityId, EntityInner, EntityTag};
use crate::output::EntityNotice;

/// Registry of all transient simulation entities.
///
/// Entity ids start at 1 (0 is reserved for the player) and increase
/// monotonically; they are not reused after a restart so the renderer never
/// confuses a stale visual with a new entity.
#[derive(Debug, Clone)]
pub struct Arena {
    /// Monotonically increasing entity ID counter.
    next_id: u64,
    /// Entity storage with deterministic iteration order.
    entities: BTreeMap<EntityId, Entity>,
    /// Spawn/despawn notices not yet drained.
    notices: Vec<EntityNotice>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: EntityId::PLAYER.as_u64() + 1,
            entities: BTreeMap::new(),
            notices: Vec::new(),
        }
    }

    /// Spawns a new entity and queues a [`EntityNotice::Spawned`].
    ///
    /// # Returns
    ///
    /// The unique ID assigned to the new entity.
    pub fn spawn(&mut self, inner: EntityInner) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        let entity = Entity::new(id, inner);
        self.notices.push(EntityNotice::Spawned {
            id,
            tag: entity.tag(),
            position: entity.position(),
        });
        self.entities.insert(id, entity);
        id
    }

    /// Despawns an entity and queues a [`EntityNotice::Despawned`].
    ///
    /// # Returns
    ///
    /// The removed entity, if it existed. Unknown ids queue nothing.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(&id)?;
        self.notices.push(EntityNotice::Despawned {
            id,
            tag: entity.tag(),
        });
        Some(entity)
    }

    /// Despawns every id in `ids`, in order. Ids already gone are skipped.
    pub fn despawn_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EntityId>,
    {
        for id in ids {
            self.despawn(id);
        }
    }

    /// Despawns every entity in every collection.
    pub fn clear(&mut self) {
        for tag in EntityTag::ALL {
            let ids = self.ids_with_tag(tag);
            self.despawn_all(ids);
        }
    }

    /// Returns a reference to an entity by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Returns a mutable reference to an entity by ID.
    #[must_use]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Returns true if the entity is still registered.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Returns an iterator over all entities in id order.
    pub fn entities_sorted(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    /// Returns an iterator over the entities of one collection in id order.
    pub fn iter_tag(&self, tag: EntityTag) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values().filter(move |e| e.tag() == tag)
    }

    /// Returns an iterator over mutable entities of one collection in id order.
    pub fn iter_tag_mut(&mut self, tag: EntityTag) -> impl Iterator<Item = &mut Entity> + '_ {
        self.entities.values_mut().filter(move |e| e.tag() == tag)
    }

    /// Returns the ids of one collection in id order.
    ///
    /// The returned vector does not borrow the arena, so callers can mutate or
    /// despawn while walking it.
    #[must_use]
    pub fn ids_with_tag(&self, tag: EntityTag) -> Vec<EntityId> {
        self.iter_tag(tag).map(Entity::id).collect()
    }

    /// Returns the number of entities in one collection.
    #[must_use]
    pub fn count(&self, tag: EntityTag) -> usize {
        self.iter_tag(tag).count()
    }

    /// Returns the number of entities in the arena.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the arena has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drains the spawn/despawn notices queued since the last call.
    pub fn take_notices(&mut self) -> Vec<EntityNotice> {
        std::mem::take(&mut self.notices)
    }
}
