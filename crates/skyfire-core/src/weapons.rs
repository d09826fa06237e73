//! Weapons: player volleys and enemy shots.
//!
//! Both sides fire through a cooldown gate measured against the session
//! clock. A fire call that loses against its gate does nothing at all: no
//! projectile, no flash, no event.

use glam::Vec3;
use tracing::debug;

use crate::constants::{
    ENEMY_FIRE_COOLDOWN_MS, ENEMY_SHOT_SPEED, PLAYER_SHOT_SPEED, VOLLEY_COOLDOWN_MS,
    VOLLEY_OFFSETS,
};
use crate::entity::{EffectKind, EntityId, EntityInner, ProjectileComponents};
use crate::output::GameEvent;
use crate::world::World;

/// Returns true if `last_ms` is at least `cooldown_ms` before `now_ms`.
///
/// `None` means the shooter never fired and is always ready.
#[must_use]
pub fn cooldown_elapsed(last_ms: Option<u64>, now_ms: u64, cooldown_ms: u64) -> bool {
    last_ms.map_or(true, |last| now_ms.saturating_sub(last) >= cooldown_ms)
}

/// Fires a player volley if the game is active and the 300 ms gate is open.
///
/// A volley is three shots at the player's position offset along x, heading
/// down -z, plus a muzzle flash at the player. Returns true if it fired.
pub fn try_fire_volley(world: &mut World, now_ms: u64) -> bool {
    if !world.is_active()
        || !cooldown_elapsed(world.player.last_fire_ms, now_ms, VOLLEY_COOLDOWN_MS)
    {
        return false;
    }
    world.player.last_fire_ms = Some(now_ms);

    let origin = world.player.position;
    let velocity = Vec3::new(0.0, 0.0, -PLAYER_SHOT_SPEED);
    for offset in VOLLEY_OFFSETS {
        let position = origin + Vec3::new(offset, 0.0, 0.0);
        world.arena.spawn(EntityInner::Projectile(ProjectileComponents::player_shot(
            position, velocity,
        )));
    }
    world.request_effect(EffectKind::MuzzleFlash, origin);
    world.emit(GameEvent::VolleyFired { position: origin });
    debug!(x = origin.x, y = origin.y, "volley fired");
    true
}

/// Fires one shot from `enemy` towards the player's current position if its
/// 1200 ms gate is open. Returns true if it fired.
pub fn try_enemy_fire(world: &mut World, enemy: EntityId, now_ms: u64) -> bool {
    let target = world.player.position;
    let Some(shooter) = world.arena.get_mut(enemy).and_then(|e| e.as_enemy_mut()) else {
        return false;
    };
    if !cooldown_elapsed(shooter.last_shot_ms, now_ms, ENEMY_FIRE_COOLDOWN_MS) {
        return false;
    }
    shooter.last_shot_ms = Some(now_ms);
    let origin = shooter.position;

    let velocity = (target - origin).normalize_or_zero() * ENEMY_SHOT_SPEED;
    world.arena.spawn(EntityInner::Projectile(ProjectileComponents::enemy_shot(
        origin, velocity,
    )));
    world.request_effect(EffectKind::MuzzleFlash, origin);
    world.emit(GameEvent::EnemyFired { enemy });
    debug!(%enemy, "enemy fired");
    true
}
