//! Axis-aligned bounding boxes for overlap tests.
//!
//! Every collidable kind has a fixed half-extent approximating its visual
//! mesh. Boxes are rebuilt from the entity's current position each time they
//! are needed; no box is cached across ticks.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Half-extents of the player's aircraft (wingspan on x, gear-to-fin on y,
/// tail-to-propeller on z).
pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(2.5, 1.0, 2.0);
/// Half-extents of an enemy aircraft.
pub const ENEMY_HALF_EXTENTS: Vec3 = Vec3::new(2.0, 0.8, 1.8);
/// Half-extents of a star pickup.
pub const STAR_HALF_EXTENTS: Vec3 = Vec3::splat(0.5);
/// Half-extents of a player shot.
pub const PLAYER_SHOT_HALF_EXTENTS: Vec3 = Vec3::splat(0.3);
/// Half-extents of an enemy shot.
pub const ENEMY_SHOT_HALF_EXTENTS: Vec3 = Vec3::splat(0.25);

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from min/max corners.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box centred on `center` extending `half_extents` on each axis.
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Check whether two boxes overlap. Touching faces count as overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}
