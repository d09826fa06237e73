//! Spawner: periodic creation of enemies and stars.
//!
//! Each kind has an independent [`IntervalTimer`] pumped at the start of
//! every step. A timer that fell behind (a long frame, a paused host) fires
//! once and reschedules from the current time instead of replaying every
//! missed period.
//!
//! # Example
//!
//! ```
//! use skyfire_core::spawner::IntervalTimer;
//!
//! let mut timer = IntervalTimer::new(3000, 0);
//! assert!(!timer.poll(2999));
//! assert!(timer.poll(3000));
//! // Ten missed periods still fire once.
//! assert!(timer.poll(40_000));
//! assert!(!timer.poll(42_999));
//! assert!(timer.poll(43_000));
//! ```

use glam::Vec3;
use rand::Rng;
use tracing::debug;

use crate::config::SessionConfig;
use crate::constants::{
    ENEMY_PROPELLER_BASE, ENEMY_PROPELLER_JITTER, ENEMY_SPAWN_X, ENEMY_SPAWN_Y, ENEMY_SPAWN_Z,
    ENEMY_SPEED_BASE, ENEMY_SPEED_JITTER, ENEMY_TURN_RATE_BASE, ENEMY_TURN_RATE_JITTER,
    STAR_SPAWN_X, STAR_SPAWN_Y, STAR_SPAWN_Z,
};
use crate::entity::{EnemyComponents, EntityId, EntityInner, StarComponents};
use crate::world::World;

/// Fixed-period trigger against a millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    period_ms: u64,
    next_due_ms: u64,
}

impl IntervalTimer {
    /// Creates a timer first due one period after `start_ms`.
    #[must_use]
    pub const fn new(period_ms: u64, start_ms: u64) -> Self {
        Self {
            period_ms,
            next_due_ms: start_ms.saturating_add(period_ms),
        }
    }

    /// Returns true if the timer is due at `now_ms`, rescheduling it.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms = now_ms.saturating_add(self.period_ms);
        true
    }

    /// Returns the clock time of the next firing.
    #[must_use]
    pub const fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }
}

/// The two spawn timers of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawner {
    enemy: IntervalTimer,
    star: IntervalTimer,
}

impl Spawner {
    /// Creates the timers from `config`, started at `start_ms`.
    #[must_use]
    pub const fn new(config: &SessionConfig, start_ms: u64) -> Self {
        Self {
            enemy: IntervalTimer::new(config.enemy_interval_ms, start_ms),
            star: IntervalTimer::new(config.star_interval_ms, start_ms),
        }
    }

    /// Fires every due timer. Enemy first, then star.
    ///
    /// Timers keep running while the game is over; their firings are no-ops.
    pub fn pump(&mut self, world: &mut World, now_ms: u64) {
        if self.enemy.poll(now_ms) {
            spawn_enemy(world);
        }
        if self.star.poll(now_ms) {
            spawn_star(world);
        }
    }
}

/// Spawns one enemy at a random point on the far spawn plane.
///
/// Returns `None` without touching the RNG when the game is over.
pub fn spawn_enemy(world: &mut World) -> Option<EntityId> {
    if !world.is_active() {
        return None;
    }
    let rng = &mut world.rng;
    let position = Vec3::new(
        rng.gen_range(-ENEMY_SPAWN_X..ENEMY_SPAWN_X),
        rng.gen_range(-ENEMY_SPAWN_Y..ENEMY_SPAWN_Y),
        ENEMY_SPAWN_Z,
    );
    let speed = ENEMY_SPEED_BASE + rng.gen::<f32>() * ENEMY_SPEED_JITTER;
    let turn_rate = ENEMY_TURN_RATE_BASE + rng.gen::<f32>() * ENEMY_TURN_RATE_JITTER;
    let propeller_spin = ENEMY_PROPELLER_BASE + rng.gen::<f32>() * ENEMY_PROPELLER_JITTER;

    let id = world.arena.spawn(EntityInner::Enemy(EnemyComponents::new(
        position,
        speed,
        turn_rate,
        propeller_spin,
    )));
    debug!(%id, x = position.x, y = position.y, turn_rate, "enemy spawned");
    Some(id)
}

/// Spawns one star at a random point on the star spawn plane.
///
/// Returns `None` without touching the RNG when the game is over.
pub fn spawn_star(world: &mut World) -> Option<EntityId> {
    if !world.is_active() {
        return None;
    }
    let position = Vec3::new(
        world.rng.gen_range(-STAR_SPAWN_X..STAR_SPAWN_X),
        world.rng.gen_range(-STAR_SPAWN_Y..STAR_SPAWN_Y),
        STAR_SPAWN_Z,
    );
    let id = world
        .arena
        .spawn(EntityInner::Star(StarComponents::new(position)));
    debug!(%id, x = position.x, y = position.y, "star spawned");
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityTag;

    mod timer_tests {
        use super::*;

        #[test]
        fn fires_on_period_boundary() {
            let mut timer = IntervalTimer::new(5000, 0);
            assert!(!timer.poll(0));
            assert!(!timer.poll(4999));
            assert!(timer.poll(5000));
            assert_eq!(timer.next_due_ms(), 10_000);
        }

        #[test]
        fn missed_periods_coalesce() {
            let mut timer = IntervalTimer::new(1000, 0);
            assert!(timer.poll(5500));
            assert!(!timer.poll(5600));
            assert_eq!(timer.next_due_ms(), 6500);
        }
    }

    mod spawn_tests {
        use super::*;

        #[test]
        fn enemy_within_spawn_volume() {
            let mut world = World::new(7);
            for _ in 0..50 {
                spawn_enemy(&mut world);
            }
            for entity in world.arena.iter_tag(EntityTag::Enemy) {
                let enemy = entity.as_enemy().unwrap();
                assert!(enemy.position.x.abs() <= ENEMY_SPAWN_X);
                assert!(enemy.position.y.abs() <= ENEMY_SPAWN_Y);
                assert!((enemy.position.z - ENEMY_SPAWN_Z).abs() < f32::EPSILON);
                assert_eq!(enemy.health, 70);
                assert!((0.4..=0.7).contains(&enemy.speed));
                assert!((0.01..=0.03).contains(&enemy.turn_rate));
                assert!((0.3..=0.4).contains(&enemy.propeller_spin));
            }
        }

        #[test]
        fn star_within_spawn_volume() {
            let mut world = World::new(7);
            for _ in 0..50 {
                spawn_star(&mut world);
            }
            assert_eq!(world.arena.count(EntityTag::Star), 50);
            for entity in world.arena.iter_tag(EntityTag::Star) {
                let p = entity.position();
                assert!(p.x.abs() <= STAR_SPAWN_X);
                assert!(p.y.abs() <= STAR_SPAWN_Y);
                assert!((p.z - STAR_SPAWN_Z).abs() < f32::EPSILON);
            }
        }

        #[test]
        fn no_spawns_when_over() {
            let mut world = World::new(7);
            world.game_over();
            assert!(spawn_enemy(&mut world).is_none());
            assert!(spawn_star(&mut world).is_none());
            assert!(world.arena.is_empty());
        }

        #[test]
        fn pump_spawns_per_timer() {
            let mut world = World::new(7);
            let mut spawner = Spawner::new(&SessionConfig::default(), 0);

            spawner.pump(&mut world, 3000);
            assert_eq!(world.arena.count(EntityTag::Star), 1);
            assert_eq!(world.arena.count(EntityTag::Enemy), 0);

            spawner.pump(&mut world, 5000);
            assert_eq!(world.arena.count(EntityTag::Enemy), 1);
            assert_eq!(world.arena.count(EntityTag::Star), 1);

            spawner.pump(&mut world, 6000);
            assert_eq!(world.arena.count(EntityTag::Star), 2);
        }
    }
}
