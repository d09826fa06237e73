//! Render snapshots: a read-only copy of everything a renderer draws.
//!
//! The renderer keeps one visual per entity id, created and destroyed from
//! the [`EntityNotice`](crate::output::EntityNotice)s in each tick report,
//! and updates their transforms from the latest [`RenderSnapshot`].
//!
//! # Example
//!
//! ```
//! use skyfire_core::session::GameSession;
//! use skyfire_core::config::SessionConfig;
//!
//! let session = GameSession::new(SessionConfig::default()).unwrap();
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.player.health, 350);
//! assert!(snapshot.entities.is_empty());
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::{EffectKind, Entity, EntityId, EntityInner, EntityTag};
use crate::hud::GamePhase;
use crate::world::{PlayerCraft, World};

// =============================================================================
// Player
// =============================================================================

/// Render state of the player craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Always [`EntityId::PLAYER`].
    pub id: EntityId,
    /// World position.
    pub position: Vec3,
    /// Pitch in `x`, roll in `z`.
    pub rotation: Vec3,
    /// Propeller angle.
    pub propeller_angle: f32,
    /// Health.
    pub health: u32,
}

impl From<&PlayerCraft> for PlayerSnapshot {
    fn from(player: &PlayerCraft) -> Self {
        Self {
            id: player.id(),
            position: player.position,
            rotation: player.rotation,
            propeller_angle: player.propeller_angle,
            health: player.health,
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// Render state of one registry entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity id; the renderer's lookup key.
    pub id: EntityId,
    /// Collection the entity belongs to.
    pub tag: EntityTag,
    /// World position.
    pub position: Vec3,
    /// Euler rotation. Enemies turn around `y`, stars around `x` and `y`.
    pub rotation: Vec3,
    /// Propeller angle for enemies, zero otherwise.
    pub propeller_angle: f32,
    /// Enemy health; `None` for other kinds.
    pub health: Option<i32>,
    /// Enemy speed trait, for engine sound and contrail length; `None` for
    /// other kinds.
    pub speed: Option<f32>,
    /// Ticks left for projectiles; `None` for other kinds.
    pub lifetime: Option<u32>,
    /// Effect kind for effects; `None` for other kinds.
    pub effect: Option<EffectKind>,
}

impl From<&Entity> for EntitySnapshot {
    fn from(entity: &Entity) -> Self {
        let mut snapshot = Self {
            id: entity.id(),
            tag: entity.tag(),
            position: entity.position(),
            rotation: Vec3::ZERO,
            propeller_angle: 0.0,
            health: None,
            speed: None,
            lifetime: None,
            effect: None,
        };
        match entity.inner() {
            EntityInner::Enemy(enemy) => {
                snapshot.rotation = Vec3::new(0.0, enemy.yaw, 0.0);
                snapshot.propeller_angle = enemy.propeller_angle;
                snapshot.health = Some(enemy.health);
                snapshot.speed = Some(enemy.speed);
            }
            EntityInner::Star(star) => snapshot.rotation = star.rotation,
            EntityInner::Projectile(shot) => snapshot.lifetime = Some(shot.lifetime),
            EntityInner::Effect(effect) => snapshot.effect = Some(effect.kind),
        }
        snapshot
    }
}

// =============================================================================
// RenderSnapshot
// =============================================================================

/// Everything visible after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Tick the snapshot was taken after.
    pub tick: u64,
    /// Session phase.
    pub phase: GamePhase,
    /// The player craft.
    pub player: PlayerSnapshot,
    /// Every registry entity, in id order.
    pub entities: Vec<EntitySnapshot>,
}

impl RenderSnapshot {
    /// Captures the world.
    #[must_use]
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.tick,
            phase: world.phase,
            player: PlayerSnapshot::from(&world.player),
            entities: world
                .arena
                .entities_sorted()
                .map(EntitySnapshot::from)
                .collect(),
        }
    }

    /// Returns the entities of one collection.
    pub fn with_tag(&self, tag: EntityTag) -> impl Iterator<Item = &EntitySnapshot> + '_ {
        self.entities.iter().filter(move |e| e.tag == tag)
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&EntitySnapshot> {
        self.entities
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|index| &self.entities[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EnemyComponents, ProjectileComponents, StarComponents};

    #[test]
    fn captures_every_entity_in_id_order() {
        let mut world = World::new(0);
        let star = world
            .arena
            .spawn(EntityInner::Star(StarComponents::new(Vec3::new(1.0, 2.0, -50.0))));
        let enemy = world.arena.spawn(EntityInner::Enemy(EnemyComponents::new(
            Vec3::new(0.0, 0.0, -70.0),
            0.5,
            0.02,
            0.35,
        )));
        let shot = world
            .arena
            .spawn(EntityInner::Projectile(ProjectileComponents::player_shot(
                Vec3::ZERO,
                Vec3::NEG_Z,
            )));

        let snapshot = RenderSnapshot::capture(&world);

        let ids: Vec<_> = snapshot.entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![star, enemy, shot]);
        assert_eq!(snapshot.get(enemy).unwrap().health, Some(70));
        assert_eq!(snapshot.get(enemy).unwrap().speed, Some(0.5));
        assert_eq!(snapshot.get(star).unwrap().speed, None);
        assert_eq!(snapshot.get(shot).unwrap().lifetime, Some(100));
        assert_eq!(snapshot.with_tag(EntityTag::Star).count(), 1);
        assert!(snapshot.get(EntityId::new(99)).is_none());
    }

    #[test]
    fn player_uses_reserved_id() {
        let world = World::new(0);
        let snapshot = RenderSnapshot::capture(&world);
        assert_eq!(snapshot.player.id, EntityId::PLAYER);
        assert_eq!(snapshot.player.position, Vec3::ZERO);
    }

    #[test]
    fn snapshot_serializes() {
        let world = World::new(0);
        let json = serde_json::to_string(&RenderSnapshot::capture(&world)).unwrap();
        assert!(json.contains("\"phase\":\"Active\""));
    }
}
