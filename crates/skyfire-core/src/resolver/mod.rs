//! Resolvers: the per-tick systems that mutate the world.
//!
//! A step runs the resolvers in a fixed order against one `&mut World`:
//!
//! 1. [`MovementResolver`]: player, enemies (pursuit and fire decisions), stars
//! 2. [`ProjectileResolver`]: shot integration and expiry
//! 3. [`CombatResolver`]: collisions, damage, score, pickups
//! 4. [`EffectsResolver`]: effect entities spawned and expired
//!
//! The first three only run while the game is active. Effects keep running
//! after a game over so the final explosion finishes.
//!
//! # Invariants
//!
//! - Resolvers MUST be deterministic given the same world and frame
//! - Entities are removed only after a pass over their collection
//!   (collect ids, then despawn)
//! - All randomness comes from `World::rng`

mod combat;
mod effects;
mod movement;
mod projectile;

pub use combat::CombatResolver;
pub use effects::EffectsResolver;
pub use movement::MovementResolver;
pub use projectile::ProjectileResolver;

use crate::config::StarMotion;
use crate::constants::NOMINAL_FPS;
use crate::world::World;

/// Timing for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Clock time of the step.
    pub now_ms: u64,
    /// Seconds since the previous step, already clamped.
    pub delta_secs: f32,
    /// How stars scale with frame time.
    pub star_motion: StarMotion,
}

impl FrameContext {
    /// Creates a frame context.
    #[must_use]
    pub const fn new(now_ms: u64, delta_secs: f32, star_motion: StarMotion) -> Self {
        Self {
            now_ms,
            delta_secs,
            star_motion,
        }
    }

    /// A frame of exactly one nominal tick (1/60 s) at `now_ms`.
    #[must_use]
    pub fn nominal(now_ms: u64) -> Self {
        Self::new(now_ms, 1.0 / NOMINAL_FPS, StarMotion::WallClock)
    }

    /// Seconds of star motion for this frame.
    #[must_use]
    pub fn star_secs(&self) -> f32 {
        match self.star_motion {
            StarMotion::WallClock => self.delta_secs,
            StarMotion::FixedStep => 1.0 / NOMINAL_FPS,
        }
    }
}

/// A per-tick world system.
///
/// # Example
///
/// ```
/// use skyfire_core::resolver::{FrameContext, Resolver};
/// use skyfire_core::world::World;
///
/// struct TickCounter;
///
/// impl Resolver for TickCounter {
///     fn name(&self) -> &'static str {
///         "tick_counter"
///     }
///
///     fn resolve(&self, world: &mut World, _frame: &FrameContext) {
///         world.score += 1;
///     }
/// }
///
/// let mut world = World::new(0);
/// TickCounter.resolve(&mut world, &FrameContext::nominal(0));
/// assert_eq!(world.score, 1);
/// ```
pub trait Resolver: Send + Sync {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Returns true if the resolver also runs in the Over phase.
    fn runs_when_over(&self) -> bool {
        false
    }

    /// Applies this system's update for one step.
    fn resolve(&self, world: &mut World, frame: &FrameContext);
}

/// The resolvers of a session, in execution order.
#[must_use]
pub fn default_pipeline() -> Vec<Box<dyn Resolver>> {
    vec![
        Box::new(MovementResolver::new()),
        Box::new(ProjectileResolver::new()),
        Box::new(CombatResolver::new()),
        Box::new(EffectsResolver::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_is_object_safe() {
        fn _accepts_boxed(_resolver: Box<dyn Resolver>) {}
        fn _accepts_slice(_resolvers: &[Box<dyn Resolver>]) {}
    }

    #[test]
    fn pipeline_order() {
        let names: Vec<_> = default_pipeline().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["movement", "projectile", "combat", "effects"]);
    }

    #[test]
    fn only_effects_run_when_over() {
        let over: Vec<_> = default_pipeline()
            .iter()
            .filter(|r| r.runs_when_over())
            .map(|r| r.name())
            .collect();
        assert_eq!(over, vec!["effects"]);
    }

    #[test]
    fn fixed_step_ignores_delta() {
        let frame = FrameContext::new(0, 0.1, StarMotion::FixedStep);
        assert!((frame.star_secs() - 1.0 / 60.0).abs() < f32::EPSILON);
        let frame = FrameContext::new(0, 0.1, StarMotion::WallClock);
        assert!((frame.star_secs() - 0.1).abs() < f32::EPSILON);
    }
}
