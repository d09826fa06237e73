//! Component structs for each entity kind.
//!
//! Each struct holds all simulation state for one kind of entity. Visual-only
//! state (rotations, propeller angles) lives here too so the render boundary
//! can read it from a snapshot, but nothing in the simulation depends on it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::aabb::{
    Aabb, ENEMY_HALF_EXTENTS, ENEMY_SHOT_HALF_EXTENTS, PLAYER_SHOT_HALF_EXTENTS,
    STAR_HALF_EXTENTS,
};
use crate::constants::{
    ENEMY_HEALTH, ENEMY_SHOT_DAMAGE, ENEMY_SHOT_MAX_Z, EXPLOSION_LIFETIME_TICKS,
    HIT_LIFETIME_TICKS, MUZZLE_FLASH_MS, PLAYER_SHOT_DAMAGE, PLAYER_SHOT_MIN_Z,
    PROJECTILE_BOUND_XY, PROJECTILE_LIFETIME, STAR_SPIN,
};

/// Components for enemy aircraft.
///
/// Enemies fly towards the player along +z while steering their x/y towards
/// the player's current x/y (first-order lag pursuit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyComponents {
    /// World position.
    pub position: Vec3,
    /// Rolled speed trait in `[0.4, 0.7)`. Presentation only: every enemy
    /// closes in at the shared `WORLD_SPEED * ENEMY_APPROACH_FACTOR`.
    pub speed: f32,
    /// Fraction of the remaining x/y gap closed each tick.
    pub turn_rate: f32,
    /// Remaining health. Goes negative on overkill.
    pub health: i32,
    /// Smoothed facing angle around y (visual).
    pub yaw: f32,
    /// Propeller spin per tick (visual).
    pub propeller_spin: f32,
    /// Accumulated propeller angle (visual).
    pub propeller_angle: f32,
    /// Clock time of the last shot, `None` if it never fired.
    pub last_shot_ms: Option<u64>,
}

impl EnemyComponents {
    /// Creates an enemy at `position` with full health.
    #[must_use]
    pub fn new(position: Vec3, speed: f32, turn_rate: f32, propeller_spin: f32) -> Self {
        Self {
            position,
            speed,
            turn_rate,
            health: ENEMY_HEALTH,
            yaw: 0.0,
            propeller_spin,
            propeller_angle: 0.0,
            last_shot_ms: None,
        }
    }

    /// Returns the enemy's collision box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, ENEMY_HALF_EXTENTS)
    }

    /// Returns true once health has dropped to zero or below.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Components for star pickups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarComponents {
    /// World position.
    pub position: Vec3,
    /// Accumulated rotation (x, y); visual only.
    pub rotation: Vec3,
    /// Spin per nominal frame around y.
    pub spin: f32,
}

impl StarComponents {
    /// Creates a star at `position` with the standard spin.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            spin: STAR_SPIN,
        }
    }

    /// Returns the star's collision box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, STAR_HALF_EXTENTS)
    }
}

/// Which side fired a projectile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Fired by the player; damages enemies.
    Player,
    /// Fired by an enemy; damages the player.
    Enemy,
}

/// Components for in-flight shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileComponents {
    /// Side that fired the shot.
    pub owner: Owner,
    /// World position.
    pub position: Vec3,
    /// Displacement per tick.
    pub velocity: Vec3,
    /// Damage dealt on hit.
    pub damage: u32,
    /// Ticks left before the shot expires.
    pub lifetime: u32,
}

impl ProjectileComponents {
    /// Creates a player shot at `position` travelling with `velocity`.
    #[must_use]
    pub fn player_shot(position: Vec3, velocity: Vec3) -> Self {
        Self {
            owner: Owner::Player,
            position,
            velocity,
            damage: PLAYER_SHOT_DAMAGE,
            lifetime: PROJECTILE_LIFETIME,
        }
    }

    /// Creates an enemy shot at `position` travelling with `velocity`.
    #[must_use]
    pub fn enemy_shot(position: Vec3, velocity: Vec3) -> Self {
        Self {
            owner: Owner::Enemy,
            position,
            velocity,
            damage: ENEMY_SHOT_DAMAGE,
            lifetime: PROJECTILE_LIFETIME,
        }
    }

    /// Returns the shot's collision box; enemy shots are slightly smaller.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let half = match self.owner {
            Owner::Player => PLAYER_SHOT_HALF_EXTENTS,
            Owner::Enemy => ENEMY_SHOT_HALF_EXTENTS,
        };
        Aabb::from_center(self.position, half)
    }

    /// Returns true if the shot has left the playable volume.
    ///
    /// The depth limit depends on the owner: player shots fly away from the
    /// camera (-z), enemy shots towards it (+z).
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        let p = self.position;
        if p.x.abs() > PROJECTILE_BOUND_XY || p.y.abs() > PROJECTILE_BOUND_XY {
            return true;
        }
        match self.owner {
            Owner::Player => p.z < PLAYER_SHOT_MIN_Z,
            Owner::Enemy => p.z > ENEMY_SHOT_MAX_Z,
        }
    }
}

/// Transient visual effect kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Large burst on a kill or on the player's death.
    Explosion,
    /// Small spark where a shot connected without killing.
    Hit,
    /// Brief flash at a shooter's position.
    MuzzleFlash,
}

impl EffectKind {
    /// Returns the initial lifetime for a new effect of this kind.
    ///
    /// `now_ms` anchors wall-clock lifetimes.
    #[must_use]
    pub const fn lifetime(self, now_ms: u64) -> EffectLifetime {
        match self {
            Self::Explosion => EffectLifetime::Ticks(EXPLOSION_LIFETIME_TICKS),
            Self::Hit => EffectLifetime::Ticks(HIT_LIFETIME_TICKS),
            Self::MuzzleFlash => EffectLifetime::Until(now_ms + MUZZLE_FLASH_MS),
        }
    }
}

/// Remaining lifetime of an effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectLifetime {
    /// Ticks left.
    Ticks(u32),
    /// Expires once the clock reaches this millisecond timestamp.
    Until(u64),
}

/// Components for transient effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectComponents {
    /// Effect kind.
    pub kind: EffectKind,
    /// World position the effect is anchored at.
    pub position: Vec3,
    /// Remaining lifetime.
    pub remaining: EffectLifetime,
}

impl EffectComponents {
    /// Creates an effect of `kind` at `position` started at `now_ms`.
    #[must_use]
    pub const fn new(kind: EffectKind, position: Vec3, now_ms: u64) -> Self {
        Self {
            kind,
            position,
            remaining: kind.lifetime(now_ms),
        }
    }

    /// Advances the lifetime by one tick and returns true if it has expired.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        match &mut self.remaining {
            EffectLifetime::Ticks(ticks) => {
                *ticks = ticks.saturating_sub(1);
                *ticks == 0
            }
            EffectLifetime::Until(deadline) => now_ms >= *deadline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enemy_has_full_health() {
        let enemy = EnemyComponents::new(Vec3::ZERO, 0.5, 0.02, 0.3);
        assert_eq!(enemy.health, 70);
        assert!(!enemy.is_dead());
        assert!(enemy.last_shot_ms.is_none());
    }

    #[test]
    fn shots_carry_owner_damage() {
        let player = ProjectileComponents::player_shot(Vec3::ZERO, Vec3::NEG_Z);
        let enemy = ProjectileComponents::enemy_shot(Vec3::ZERO, Vec3::Z);
        assert_eq!(player.damage, 50);
        assert_eq!(enemy.damage, 70);
        assert_eq!(player.lifetime, 100);
        assert_eq!(enemy.lifetime, 100);
    }

    mod bounds_tests {
        use super::*;

        #[test]
        fn player_shot_leaves_past_far_plane() {
            let mut shot = ProjectileComponents::player_shot(Vec3::new(0.0, 0.0, -100.0), Vec3::ZERO);
            assert!(!shot.is_out_of_bounds());
            shot.position.z = -100.5;
            assert!(shot.is_out_of_bounds());
        }

        #[test]
        fn enemy_shot_leaves_behind_camera() {
            let mut shot = ProjectileComponents::enemy_shot(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO);
            assert!(!shot.is_out_of_bounds());
            shot.position.z = 20.5;
            assert!(shot.is_out_of_bounds());
        }

        #[test]
        fn depth_limit_is_owner_specific() {
            let player = ProjectileComponents::player_shot(Vec3::new(0.0, 0.0, 25.0), Vec3::ZERO);
            let enemy = ProjectileComponents::enemy_shot(Vec3::new(0.0, 0.0, -150.0), Vec3::ZERO);
            assert!(!player.is_out_of_bounds());
            assert!(!enemy.is_out_of_bounds());
        }

        #[test]
        fn lateral_limit_applies_to_both() {
            let player = ProjectileComponents::player_shot(Vec3::new(50.5, 0.0, 0.0), Vec3::ZERO);
            let enemy = ProjectileComponents::enemy_shot(Vec3::new(0.0, -51.0, 0.0), Vec3::ZERO);
            assert!(player.is_out_of_bounds());
            assert!(enemy.is_out_of_bounds());
        }
    }

    mod effect_tests {
        use super::*;

        #[test]
        fn hit_expires_after_twenty_ticks() {
            let mut hit = EffectComponents::new(EffectKind::Hit, Vec3::ZERO, 0);
            for _ in 0..19 {
                assert!(!hit.advance(0));
            }
            assert!(hit.advance(0));
        }

        #[test]
        fn explosion_lasts_sixty_ticks() {
            let mut boom = EffectComponents::new(EffectKind::Explosion, Vec3::ZERO, 0);
            let expired_at = (1..=100).find(|_| boom.advance(0));
            assert_eq!(expired_at, Some(60));
        }

        #[test]
        fn muzzle_flash_uses_wall_clock() {
            let mut flash = EffectComponents::new(EffectKind::MuzzleFlash, Vec3::ZERO, 1_000);
            assert!(!flash.advance(1_049));
            assert!(flash.advance(1_050));
        }
    }
}
