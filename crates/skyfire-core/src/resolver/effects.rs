//! Effects resolver: transient visuals with a lifetime.
//!
//! Effect requests raised during a step (or by input between steps) become
//! `Effect` entities here. Existing effects age first, so a new effect gets
//! its full lifetime starting with the next step.

use crate::entity::{EffectComponents, EntityId, EntityInner, EntityTag};
use crate::world::World;

use super::{FrameContext, Resolver};

/// Resolver that ages, expires and spawns effect entities.
///
/// Runs in every phase so an explosion started by the fatal hit plays out
/// behind the game-over screen.
#[derive(Debug, Clone, Default)]
pub struct EffectsResolver;

impl EffectsResolver {
    /// Creates a new effects resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Advances every live effect and removes the expired ones.
    pub fn age(world: &mut World, now_ms: u64) {
        let expired: Vec<EntityId> = world
            .arena
            .iter_tag_mut(EntityTag::Effect)
            .filter_map(|entity| {
                let id = entity.id();
                let effect = entity.as_effect_mut()?;
                effect.advance(now_ms).then_some(id)
            })
            .collect();
        world.arena.despawn_all(expired);
    }

    /// Turns pending requests into effect entities.
    pub fn spawn_pending(world: &mut World) {
        for pending in std::mem::take(&mut world.pending_effects) {
            world.arena.spawn(EntityInner::Effect(EffectComponents::new(
                pending.request.kind,
                pending.request.position,
                pending.requested_at_ms,
            )));
        }
    }
}

impl Resolver for EffectsResolver {
    fn name(&self) -> &'static str {
        "effects"
    }

    fn runs_when_over(&self) -> bool {
        true
    }

    fn resolve(&self, world: &mut World, frame: &FrameContext) {
        Self::age(world, frame.now_ms);
        Self::spawn_pending(world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EffectKind;
    use glam::Vec3;

    fn step(world: &mut World, now_ms: u64) {
        EffectsResolver::new().resolve(world, &FrameContext::nominal(now_ms));
    }

    #[test]
    fn requests_become_entities() {
        let mut world = World::new(0);
        world.request_effect(EffectKind::Explosion, Vec3::ONE);
        step(&mut world, 0);

        let effects: Vec<_> = world.arena.iter_tag(EntityTag::Effect).collect();
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].as_effect().unwrap().kind, EffectKind::Explosion);
        assert_eq!(effects[0].position(), Vec3::ONE);
        assert!(world.pending_effects.is_empty());
    }

    #[test]
    fn hit_lives_twenty_ticks() {
        let mut world = World::new(0);
        world.request_effect(EffectKind::Hit, Vec3::ZERO);
        step(&mut world, 0);
        for _ in 0..19 {
            step(&mut world, 0);
        }
        assert_eq!(world.arena.count(EntityTag::Effect), 1);
        step(&mut world, 0);
        assert_eq!(world.arena.count(EntityTag::Effect), 0);
    }

    #[test]
    fn muzzle_flash_expires_by_clock() {
        let mut world = World::new(0);
        world.now_ms = 1_000;
        world.request_effect(EffectKind::MuzzleFlash, Vec3::ZERO);
        step(&mut world, 1_016);
        step(&mut world, 1_033);
        assert_eq!(world.arena.count(EntityTag::Effect), 1);
        step(&mut world, 1_050);
        assert_eq!(world.arena.count(EntityTag::Effect), 0);
    }

    #[test]
    fn effects_age_after_game_over() {
        let mut world = World::new(0);
        world.request_effect(EffectKind::Hit, Vec3::ZERO);
        world.game_over();
        for _ in 0..21 {
            step(&mut world, 0);
        }
        assert_eq!(world.arena.count(EntityTag::Effect), 0);
    }
}
