//! Test helper functions for setting up sessions and entities.
//!
//! Scenarios place entities directly through `GameSession::world_mut` so a
//! test controls exactly what is on screen instead of waiting on the spawn
//! timers.

use glam::Vec3;

use crate::config::SessionConfig;
use crate::entity::{EnemyComponents, EntityId, EntityInner, ProjectileComponents, StarComponents};
use crate::input::{Button, InputEvent};
use crate::output::TickReport;
use crate::session::GameSession;

/// Milliseconds per frame at 60 FPS, rounded.
pub const FRAME_MS: u64 = 16;

// =============================================================================
// Session Setup
// =============================================================================

/// Creates a session with the given seed and default tuning.
pub fn new_session(seed: u64) -> GameSession {
    GameSession::new(SessionConfig::with_seed(seed)).expect("default config is valid")
}

/// Creates a session whose spawn timers never fire during a test.
pub fn quiet_session(seed: u64) -> GameSession {
    let config = SessionConfig {
        seed,
        enemy_interval_ms: u64::MAX / 2,
        star_interval_ms: u64::MAX / 2,
        ..SessionConfig::default()
    };
    GameSession::new(config).expect("quiet config is valid")
}

/// Steps `frames` times at 60 FPS starting after `start_ms`. Returns every
/// report and the clock time of the last step.
pub fn run_frames(session: &mut GameSession, start_ms: u64, frames: u64) -> (Vec<TickReport>, u64) {
    let mut now = start_ms;
    let mut reports = Vec::new();
    for _ in 0..frames {
        now += FRAME_MS;
        reports.push(session.step(now));
    }
    (reports, now)
}

/// Presses and releases a button at `now_ms`.
pub fn tap(session: &mut GameSession, button: Button, now_ms: u64) -> bool {
    let fired = session.handle_input(InputEvent::Pressed(button), now_ms);
    session.handle_input(InputEvent::Released(button), now_ms);
    fired
}

// =============================================================================
// Entity Placement
// =============================================================================

/// Places an enemy at `position` with no pursuit, so it only moves along z.
pub fn place_enemy(session: &mut GameSession, position: Vec3) -> EntityId {
    session
        .world_mut()
        .arena
        .spawn(EntityInner::Enemy(EnemyComponents::new(position, 0.5, 0.0, 0.3)))
}

/// Places a star at `position`.
pub fn place_star(session: &mut GameSession, position: Vec3) -> EntityId {
    session
        .world_mut()
        .arena
        .spawn(EntityInner::Star(StarComponents::new(position)))
}

/// Places a player shot at `position` with the standard velocity.
pub fn place_player_shot(session: &mut GameSession, position: Vec3) -> EntityId {
    session
        .world_mut()
        .arena
        .spawn(EntityInner::Projectile(ProjectileComponents::player_shot(
            position,
            Vec3::new(0.0, 0.0, -2.5),
        )))
}

/// Places a motionless enemy shot at `position` with `lifetime` ticks left.
pub fn place_enemy_shot(session: &mut GameSession, position: Vec3, lifetime: u32) -> EntityId {
    let mut shot = ProjectileComponents::enemy_shot(position, Vec3::ZERO);
    shot.lifetime = lifetime;
    session
        .world_mut()
        .arena
        .spawn(EntityInner::Projectile(shot))
}

// =============================================================================
// Inspection
// =============================================================================

/// Returns an enemy's health, or `None` if it is gone.
pub fn enemy_health(session: &GameSession, id: EntityId) -> Option<i32> {
    session
        .world()
        .arena
        .get(id)
        .and_then(|e| e.as_enemy())
        .map(|enemy| enemy.health)
}
