//! Combat resolver: collisions, damage, score and pickups.
//!
//! The `CombatResolver` handles, in order:
//! - Player and enemy airframes touching: the player dies outright
//! - Player shots hitting enemies: damage, kills and score
//! - Enemy shots hitting the player: damage, possibly death
//! - The player touching stars: score and healing
//!
//! # Fatal Conditions
//!
//! Resolution stops at the first stage that ends the game. Nothing after a
//! fatal stage is applied in the same tick, so score never changes after
//! the final score has been recorded.

use glam::Vec3;
use tracing::debug;

use crate::constants::{SCORE_ENEMY_DESTROYED, SCORE_STAR_COLLECTED, STAR_HEAL};
use crate::entity::{EffectKind, EntityId, EntityTag};
use crate::output::GameEvent;
use crate::world::World;

use super::{FrameContext, Resolver};

/// Resolver for all collision categories.
///
/// Overlap tests use each kind's fixed half-extent box around its position,
/// inclusive on every axis. There is no swept test, so a fast shot can pass
/// through a thin target between ticks.
///
/// # Example
///
/// ```
/// use skyfire_core::resolver::{CombatResolver, FrameContext, Resolver};
/// use skyfire_core::entity::{EntityInner, StarComponents};
/// use skyfire_core::world::World;
/// use glam::Vec3;
///
/// let mut world = World::new(0);
/// world.arena.spawn(EntityInner::Star(StarComponents::new(Vec3::ZERO)));
///
/// CombatResolver::new().resolve(&mut world, &FrameContext::nominal(0));
/// assert_eq!(world.score, 10);
/// assert!(world.arena.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombatResolver;

impl CombatResolver {
    /// Creates a new combat resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Stage 1: any enemy touching the player ends the game.
    ///
    /// Returns true if the game ended.
    pub fn resolve_rams(world: &mut World) -> bool {
        let player_box = world.player.aabb();
        let rammed = world
            .arena
            .iter_tag(EntityTag::Enemy)
            .filter_map(|e| e.as_enemy())
            .any(|enemy| enemy.aabb().intersects(&player_box));
        if !rammed {
            return false;
        }
        world.player.health = 0;
        world.request_effect(EffectKind::Explosion, world.player.position);
        world.game_over();
        true
    }

    /// Stage 2: each player shot damages the first enemy (in id order) it
    /// overlaps and is consumed.
    pub fn resolve_player_shots(world: &mut World) {
        for shot_id in world.arena.ids_with_tag(EntityTag::PlayerProjectile) {
            let Some(shot) = world.arena.get(shot_id).and_then(|e| e.as_projectile()) else {
                continue;
            };
            let shot_box = shot.aabb();
            let shot_position = shot.position;
            let damage = i32::try_from(shot.damage).unwrap_or(i32::MAX);

            let target = world
                .arena
                .iter_tag(EntityTag::Enemy)
                .find(|e| e.as_enemy().is_some_and(|enemy| enemy.aabb().intersects(&shot_box)))
                .map(|e| e.id());
            let Some(enemy_id) = target else {
                continue;
            };

            world.arena.despawn(shot_id);
            let Some(enemy) = world.arena.get_mut(enemy_id).and_then(|e| e.as_enemy_mut()) else {
                continue;
            };
            enemy.health = enemy.health.saturating_sub(damage);
            let remaining = enemy.health;
            let enemy_position = enemy.position;

            if remaining <= 0 {
                world.arena.despawn(enemy_id);
                world.add_score(SCORE_ENEMY_DESTROYED);
                world.request_effect(EffectKind::Explosion, enemy_position);
                world.emit(GameEvent::EnemyDestroyed {
                    enemy: enemy_id,
                    position: enemy_position,
                });
                debug!(enemy = %enemy_id, score = world.score, "enemy destroyed");
            } else {
                world.request_effect(EffectKind::Hit, shot_position);
                world.emit(GameEvent::EnemyHit {
                    enemy: enemy_id,
                    remaining,
                });
            }
        }
    }

    /// Stage 3: enemy shots overlapping the player deal damage and are
    /// consumed.
    ///
    /// Returns true if the player died.
    pub fn resolve_enemy_shots(world: &mut World) -> bool {
        let player_box = world.player.aabb();
        let hits: Vec<(EntityId, u32, Vec3)> = world
            .arena
            .iter_tag(EntityTag::EnemyProjectile)
            .filter_map(|e| e.as_projectile().map(|shot| (e.id(), shot)))
            .filter(|(_, shot)| shot.aabb().intersects(&player_box))
            .map(|(id, shot)| (id, shot.damage, shot.position))
            .collect();

        for (shot_id, damage, position) in hits {
            world.arena.despawn(shot_id);
            let remaining = world.player.take_damage(damage);
            world.request_effect(EffectKind::Hit, position);
            world.emit(GameEvent::PlayerHit { damage, remaining });
            debug!(damage, remaining, "player hit");

            if remaining == 0 {
                world.request_effect(EffectKind::Explosion, world.player.position);
                world.game_over();
                return true;
            }
        }
        false
    }

    /// Stage 4: stars touching the player are collected.
    pub fn resolve_pickups(world: &mut World) {
        let player_box = world.player.aabb();
        let collected: Vec<EntityId> = world
            .arena
            .iter_tag(EntityTag::Star)
            .filter(|e| e.as_star().is_some_and(|star| star.aabb().intersects(&player_box)))
            .map(|e| e.id())
            .collect();

        for star in collected {
            world.arena.despawn(star);
            world.add_score(SCORE_STAR_COLLECTED);
            world.player.heal(STAR_HEAL);
            world.emit(GameEvent::StarCollected { star });
        }
    }
}

impl Resolver for CombatResolver {
    fn name(&self) -> &'static str {
        "combat"
    }

    fn resolve(&self, world: &mut World, _frame: &FrameContext) {
        if Self::resolve_rams(world) {
            return;
        }
        Self::resolve_player_shots(world);
        if Self::resolve_enemy_shots(world) {
            return;
        }
        Self::resolve_pickups(world);
    }
}
