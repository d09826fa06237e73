//! Entity module for the flight-shooter simulation.
//!
//! This module provides the core entity types held by the [`Arena`]:
//! - [`EntityId`]: Unique identifier for entities
//! - [`EntityTag`]: Collection an entity belongs to
//! - [`EntityInner`]: Type-safe storage for entity-specific components
//! - [`Entity`]: The complete entity container
//!
//! The player craft is not an arena entity; it lives on the
//! [`World`](crate::world::World) and is addressed by [`EntityId::PLAYER`].
//!
//! # Example
//!
//! ```
//! use skyfire_core::entity::{Entity, EntityId, EntityTag, EntityInner, StarComponents};
//! use glam::Vec3;
//!
//! let star = Entity::new(
//!     EntityId::new(42),
//!     EntityInner::Star(StarComponents::new(Vec3::new(0.0, 0.0, -50.0))),
//! );
//!
//! assert_eq!(star.id().as_u64(), 42);
//! assert_eq!(star.tag(), EntityTag::Star);
//! ```
//!
//! [`Arena`]: crate::arena::Arena

pub mod components;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use components::{
    EffectComponents, EffectKind, EffectLifetime, EnemyComponents, Owner, ProjectileComponents,
    StarComponents,
};

/// Unique identifier for an entity.
///
/// `EntityId` is a newtype wrapper around `u64`. Ids are assigned
/// monotonically by the arena and never reused within a session, so the
/// render boundary can key its visuals on them.
///
/// # Example
///
/// ```
/// use skyfire_core::entity::EntityId;
///
/// let id1 = EntityId::new(1);
/// let id2 = EntityId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Reserved id of the player craft.
    pub const PLAYER: Self = Self(0);

    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Collection an entity belongs to.
///
/// Every arena entity sits in exactly one collection, derived from its
/// [`EntityInner`] variant (and, for projectiles, from the owner).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    /// Hostile aircraft
    Enemy,
    /// Collectible star
    Star,
    /// Shot fired by the player
    PlayerProjectile,
    /// Shot fired by an enemy
    EnemyProjectile,
    /// Transient visual effect
    Effect,
}

impl EntityTag {
    /// All tags, in the order collections are cleared on restart.
    pub const ALL: [Self; 5] = [
        Self::Enemy,
        Self::Star,
        Self::PlayerProjectile,
        Self::EnemyProjectile,
        Self::Effect,
    ];
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enemy => write!(f, "Enemy"),
            Self::Star => write!(f, "Star"),
            Self::PlayerProjectile => write!(f, "PlayerProjectile"),
            Self::EnemyProjectile => write!(f, "EnemyProjectile"),
            Self::Effect => write!(f, "Effect"),
        }
    }
}

/// Type-safe storage for entity-specific components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityInner {
    /// Enemy aircraft components
    Enemy(EnemyComponents),
    /// Star pickup components
    Star(StarComponents),
    /// Projectile components (player or enemy owned)
    Projectile(ProjectileComponents),
    /// Transient effect components
    Effect(EffectComponents),
}

impl EntityInner {
    /// Returns the collection tag for this inner storage.
    #[must_use]
    pub const fn tag(&self) -> EntityTag {
        match self {
            Self::Enemy(_) => EntityTag::Enemy,
            Self::Star(_) => EntityTag::Star,
            Self::Projectile(p) => match p.owner {
                Owner::Player => EntityTag::PlayerProjectile,
                Owner::Enemy => EntityTag::EnemyProjectile,
            },
            Self::Effect(_) => EntityTag::Effect,
        }
    }

    /// Returns the entity's world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        match self {
            Self::Enemy(c) => c.position,
            Self::Star(c) => c.position,
            Self::Projectile(c) => c.position,
            Self::Effect(c) => c.position,
        }
    }

    /// Returns a reference to the enemy components, if this is an enemy.
    #[must_use]
    pub const fn as_enemy(&self) -> Option<&EnemyComponents> {
        match self {
            Self::Enemy(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a mutable reference to the enemy components, if this is an enemy.
    #[must_use]
    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyComponents> {
        match self {
            Self::Enemy(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a reference to the star components, if this is a star.
    #[must_use]
    pub const fn as_star(&self) -> Option<&StarComponents> {
        match self {
            Self::Star(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a mutable reference to the star components, if this is a star.
    #[must_use]
    pub fn as_star_mut(&mut self) -> Option<&mut StarComponents> {
        match self {
            Self::Star(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a reference to the projectile components, if this is a projectile.
    #[must_use]
    pub const fn as_projectile(&self) -> Option<&ProjectileComponents> {
        match self {
            Self::Projectile(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a mutable reference to the projectile components, if this is a projectile.
    #[must_use]
    pub fn as_projectile_mut(&mut self) -> Option<&mut ProjectileComponents> {
        match self {
            Self::Projectile(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a reference to the effect components, if this is an effect.
    #[must_use]
    pub const fn as_effect(&self) -> Option<&EffectComponents> {
        match self {
            Self::Effect(components) => Some(components),
            _ => None,
        }
    }

    /// Returns a mutable reference to the effect components, if this is an effect.
    #[must_use]
    pub fn as_effect_mut(&mut self) -> Option<&mut EffectComponents> {
        match self {
            Self::Effect(components) => Some(components),
            _ => None,
        }
    }
}

/// A complete entity held by the arena.
///
/// The tag is derived from the inner storage at construction and cannot
/// drift from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    tag: EntityTag,
    inner: EntityInner,
}

impl Entity {
    /// Creates a new entity with the given ID and inner storage.
    #[must_use]
    pub const fn new(id: EntityId, inner: EntityInner) -> Self {
        Self {
            id,
            tag: inner.tag(),
            inner,
        }
    }

    /// Returns the entity's unique identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the entity's collection tag.
    #[must_use]
    pub const fn tag(&self) -> EntityTag {
        self.tag
    }

    /// Returns the entity's world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.inner.position()
    }

    /// Returns a reference to the entity's inner component storage.
    #[must_use]
    pub const fn inner(&self) -> &EntityInner {
        &self.inner
    }

    /// Returns the enemy components if this is an enemy, `None` otherwise.
    #[must_use]
    pub const fn as_enemy(&self) -> Option<&EnemyComponents> {
        self.inner.as_enemy()
    }

    /// Returns mutable enemy components if this is an enemy, `None` otherwise.
    #[must_use]
    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyComponents> {
        self.inner.as_enemy_mut()
    }

    /// Returns the star components if this is a star, `None` otherwise.
    #[must_use]
    pub const fn as_star(&self) -> Option<&StarComponents> {
        self.inner.as_star()
    }

    /// Returns mutable star components if this is a star, `None` otherwise.
    #[must_use]
    pub fn as_star_mut(&mut self) -> Option<&mut StarComponents> {
        self.inner.as_star_mut()
    }

    /// Returns the projectile components if this is a projectile, `None` otherwise.
    #[must_use]
    pub const fn as_projectile(&self) -> Option<&ProjectileComponents> {
        self.inner.as_projectile()
    }

    /// Returns mutable projectile components if this is a projectile, `None` otherwise.
    #[must_use]
    pub fn as_projectile_mut(&mut self) -> Option<&mut ProjectileComponents> {
        self.inner.as_projectile_mut()
    }

    /// Returns the effect components if this is an effect, `None` otherwise.
    #[must_use]
    pub const fn as_effect(&self) -> Option<&EffectComponents> {
        self.inner.as_effect()
    }

    /// Returns mutable effect components if this is an effect, `None` otherwise.
    #[must_use]
    pub fn as_effect_mut(&mut self) -> Option<&mut EffectComponents> {
        self.inner.as_effect_mut()
    }
}
