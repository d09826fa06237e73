//! Movement resolver: player flight, enemy pursuit, star drift.
//!
//! Player and enemies move a fixed amount per tick. Stars move by elapsed
//! time (see [`FrameContext::star_secs`]), so their speed relative to the
//! enemies depends on the frame rate unless the session runs in
//! [`StarMotion::FixedStep`](crate::config::StarMotion::FixedStep).

use rand::Rng;
use tracing::debug;

use crate::constants::{
    ENEMY_APPROACH_FACTOR, ENEMY_FIRE_CHANCE, ENEMY_FIRE_MAX_Z, ENEMY_FIRE_MIN_Z, ESCAPE_Z,
    NOMINAL_FPS, PLAYER_BOUND_X, PLAYER_BOUND_Y, PLAYER_MOVE_SPEED, PLAYER_PITCH_TARGET,
    PLAYER_PROPELLER_SPIN, PLAYER_ROLL_TARGET, ROTATION_SMOOTHING, STAR_DRIFT_SCALE,
    WORLD_SPEED,
};
use crate::entity::{EntityId, EntityTag};
use crate::input::Button;
use crate::output::GameEvent;
use crate::weapons::try_enemy_fire;
use crate::world::{PlayerCraft, World};

use super::{FrameContext, Resolver};

/// Linear interpolation from `from` towards `to` by `t`.
#[must_use]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Resolver moving the player, enemies and stars.
///
/// # Processing Order
///
/// 1. Player: held directions, clamp, tilt, propeller
/// 2. Enemies: approach, pursuit, yaw; escapes removed; fire rolls for the
///    rest
/// 3. Stars: drift and spin; stars past the camera removed
#[derive(Debug, Clone, Default)]
pub struct MovementResolver;

impl MovementResolver {
    /// Creates a new movement resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Moves the player from its held buttons.
    ///
    /// Opposite buttons cancel per axis. The tilt targets favour left over
    /// right and up over down when both are held.
    pub fn move_player(player: &mut PlayerCraft) {
        let input = player.input;
        let held = |button| if input.is_held(button) { 1.0_f32 } else { 0.0 };

        let dx = held(Button::Right) - held(Button::Left);
        let dy = held(Button::Up) - held(Button::Down);
        player.position.x =
            (player.position.x + dx * PLAYER_MOVE_SPEED).clamp(-PLAYER_BOUND_X, PLAYER_BOUND_X);
        player.position.y =
            (player.position.y + dy * PLAYER_MOVE_SPEED).clamp(-PLAYER_BOUND_Y, PLAYER_BOUND_Y);

        let roll_target = if input.is_held(Button::Left) {
            PLAYER_ROLL_TARGET
        } else if input.is_held(Button::Right) {
            -PLAYER_ROLL_TARGET
        } else {
            0.0
        };
        let pitch_target = if input.is_held(Button::Up) {
            PLAYER_PITCH_TARGET
        } else if input.is_held(Button::Down) {
            -PLAYER_PITCH_TARGET
        } else {
            0.0
        };
        player.rotation.z = lerp(player.rotation.z, roll_target, ROTATION_SMOOTHING);
        player.rotation.x = lerp(player.rotation.x, pitch_target, ROTATION_SMOOTHING);
        player.propeller_angle += PLAYER_PROPELLER_SPIN;
    }

    /// Advances every enemy, removes escapees, then rolls fire decisions for
    /// the enemies still present.
    pub fn move_enemies(world: &mut World, now_ms: u64) {
        let target = world.player.position;
        let step = WORLD_SPEED * ENEMY_APPROACH_FACTOR;

        let mut escaped = Vec::new();
        let mut shooters = Vec::new();
        for entity in world.arena.iter_tag_mut(EntityTag::Enemy) {
            let id = entity.id();
            let Some(enemy) = entity.as_enemy_mut() else {
                continue;
            };
            enemy.position.z += step;
            enemy.position.x += (target.x - enemy.position.x) * enemy.turn_rate;
            enemy.position.y += (target.y - enemy.position.y) * enemy.turn_rate;

            let facing = -(target.y - enemy.position.y).atan2(target.x - enemy.position.x);
            enemy.yaw = lerp(enemy.yaw, facing, ROTATION_SMOOTHING);
            enemy.propeller_angle += enemy.propeller_spin;

            if enemy.position.z > ESCAPE_Z {
                escaped.push(id);
            } else if enemy.position.z > ENEMY_FIRE_MIN_Z && enemy.position.z < ENEMY_FIRE_MAX_Z
            {
                shooters.push(id);
            }
        }

        for id in escaped {
            world.arena.despawn(id);
            world.emit(GameEvent::EnemyEscaped { enemy: id });
            debug!(%id, "enemy escaped");
        }
        for id in shooters {
            Self::roll_enemy_fire(world, id, now_ms);
        }
    }

    /// Rolls the per-tick fire chance for one in-range enemy.
    fn roll_enemy_fire(world: &mut World, id: EntityId, now_ms: u64) {
        if world.rng.gen::<f64>() < ENEMY_FIRE_CHANCE {
            try_enemy_fire(world, id, now_ms);
        }
    }

    /// Drifts stars towards the camera and spins them.
    ///
    /// `secs` is the elapsed time the drift covers; spin is scaled to the
    /// equivalent number of nominal frames.
    pub fn move_stars(world: &mut World, secs: f32) {
        let drift = WORLD_SPEED * secs * STAR_DRIFT_SCALE;
        let frames = secs * NOMINAL_FPS;

        let mut passed: Vec<EntityId> = Vec::new();
        for entity in world.arena.iter_tag_mut(EntityTag::Star) {
            let id = entity.id();
            let Some(star) = entity.as_star_mut() else {
                continue;
            };
            star.position.z += drift;
            star.rotation.y += star.spin * frames;
            star.rotation.x += star.spin * 0.5 * frames;
            if star.position.z > ESCAPE_Z {
                passed.push(id);
            }
        }
        world.arena.despawn_all(passed);
    }
}

impl Resolver for MovementResolver {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn resolve(&self, world: &mut World, frame: &FrameContext) {
        Self::move_player(&mut world.player);
        Self::move_enemies(world, frame.now_ms);
        Self::move_stars(world, frame.star_secs());
    }
}
