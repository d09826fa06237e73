//! Projectile resolver: shot integration and expiry.

use crate::entity::{EntityId, EntityTag};
use crate::world::World;

use super::{FrameContext, Resolver};

/// Resolver integrating both sides' shots.
///
/// Each tick a shot moves by its velocity and loses one tick of lifetime.
/// It is removed in the same pass once its lifetime hits zero or it leaves
/// the playable volume, so no later system sees an expired shot.
#[derive(Debug, Clone, Default)]
pub struct ProjectileResolver;

impl ProjectileResolver {
    /// Creates a new projectile resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Integrates one collection of shots. Returns the removed ids.
    pub fn integrate(world: &mut World, tag: EntityTag) -> Vec<EntityId> {
        let mut expired = Vec::new();
        for entity in world.arena.iter_tag_mut(tag) {
            let id = entity.id();
            let Some(shot) = entity.as_projectile_mut() else {
                continue;
            };
            shot.position += shot.velocity;
            shot.lifetime = shot.lifetime.saturating_sub(1);
            if shot.lifetime == 0 || shot.is_out_of_bounds() {
                expired.push(id);
            }
        }
        world.arena.despawn_all(expired.iter().copied());
        expired
    }
}

impl Resolver for ProjectileResolver {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn resolve(&self, world: &mut World, _frame: &FrameContext) {
        Self::integrate(world, EntityTag::PlayerProjectile);
        Self::integrate(world, EntityTag::EnemyProjectile);
    }
}
