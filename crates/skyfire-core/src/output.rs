//! Output types the simulation hands to the presentation layer.
//!
//! Nothing in this module feeds back into simulation state. The session
//! collects outputs while it steps and returns them in a [`TickReport`]:
//!
//! - [`EntityNotice`]: registry spawn/despawn notifications, keyed by entity id
//! - [`EffectRequest`]: fire-and-forget visual feedback requests
//! - [`GameEvent`]: gameplay happenings for logs, audio or UI toasts
//!
//! # Example
//!
//! ```
//! use skyfire_core::output::{EffectRequest, Outbox};
//! use skyfire_core::entity::EffectKind;
//! use glam::Vec3;
//!
//! let mut outbox = Outbox::default();
//! outbox.effects.push(EffectRequest { kind: EffectKind::Hit, position: Vec3::ZERO });
//!
//! let drained = outbox.take();
//! assert_eq!(drained.effects.len(), 1);
//! assert!(outbox.effects.is_empty());
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::entity::{EffectKind, EntityId, EntityTag};
use crate::hud::HudState;

/// Registry change notification for the render boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityNotice {
    /// An entity was added; the renderer should create its visual.
    Spawned {
        /// New entity
        id: EntityId,
        /// Collection it joined
        tag: EntityTag,
        /// Initial position
        position: Vec3,
    },
    /// An entity was removed; the renderer should drop its visual.
    Despawned {
        /// Removed entity
        id: EntityId,
        /// Collection it left
        tag: EntityTag,
    },
}

impl EntityNotice {
    /// Returns the entity this notice is about.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        match self {
            Self::Spawned { id, .. } | Self::Despawned { id, .. } => *id,
        }
    }
}

/// Request to show a transient effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectRequest {
    /// Effect kind
    pub kind: EffectKind,
    /// Where to show it
    pub position: Vec3,
}

/// Gameplay events raised during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player fired a volley.
    VolleyFired {
        /// Player position at the time of firing
        position: Vec3,
    },
    /// An enemy fired at the player.
    EnemyFired {
        /// Shooter
        enemy: EntityId,
    },
    /// A player shot damaged an enemy without killing it.
    EnemyHit {
        /// Target
        enemy: EntityId,
        /// Health left after the hit
        remaining: i32,
    },
    /// A player shot destroyed an enemy.
    EnemyDestroyed {
        /// Destroyed enemy
        enemy: EntityId,
        /// Where it died
        position: Vec3,
    },
    /// An enemy flew past the player.
    EnemyEscaped {
        /// The enemy that escaped
        enemy: EntityId,
    },
    /// The player picked up a star.
    StarCollected {
        /// The collected star
        star: EntityId,
    },
    /// An enemy shot hit the player.
    PlayerHit {
        /// Damage taken
        damage: u32,
        /// Health left
        remaining: u32,
    },
    /// The session moved to the Over phase.
    GameOver {
        /// Score at the moment of death
        final_score: u64,
    },
    /// The session was restarted.
    Restarted,
}

/// Buffer collecting outputs between two drains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outbox {
    /// Registry notifications, in the order they happened.
    pub notices: Vec<EntityNotice>,
    /// Effect requests, in the order they happened.
    pub effects: Vec<EffectRequest>,
    /// Gameplay events, in the order they happened.
    pub events: Vec<GameEvent>,
}

impl Outbox {
    /// Queues an effect request.
    pub fn effect(&mut self, kind: EffectKind, position: Vec3) {
        self.effects.push(EffectRequest { kind, position });
    }

    /// Queues a gameplay event.
    pub fn event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && self.effects.is_empty() && self.events.is_empty()
    }

    /// Drains everything queued so far.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Everything the presentation layer needs after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Tick number that was just completed.
    pub tick: u64,
    /// Registry notifications.
    pub notices: Vec<EntityNotice>,
    /// Effect requests.
    pub effects: Vec<EffectRequest>,
    /// Gameplay events.
    pub events: Vec<GameEvent>,
    /// HUD state after the step.
    pub hud: HudState,
}

impl TickReport {
    /// Builds a report from a drained outbox.
    #[must_use]
    pub fn new(tick: u64, outbox: Outbox, hud: HudState) -> Self {
        Self {
            tick,
            notices: outbox.notices,
            effects: outbox.effects,
            events: outbox.events,
            hud,
        }
    }

    /// Returns true if the report carries a game-over event.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_id_accessor() {
        let spawned = EntityNotice::Spawned {
            id: EntityId::new(3),
            tag: EntityTag::Star,
            position: Vec3::ZERO,
        };
        let despawned = EntityNotice::Despawned {
            id: EntityId::new(4),
            tag: EntityTag::Enemy,
        };
        assert_eq!(spawned.id(), EntityId::new(3));
        assert_eq!(despawned.id(), EntityId::new(4));
    }

    #[test]
    fn take_leaves_outbox_empty() {
        let mut outbox = Outbox::default();
        outbox.event(GameEvent::Restarted);
        outbox.effect(EffectKind::Explosion, Vec3::ONE);
        assert!(!outbox.is_empty());

        let drained = outbox.take();
        assert!(outbox.is_empty());
        assert_eq!(drained.events, vec![GameEvent::Restarted]);
        assert_eq!(drained.effects[0].kind, EffectKind::Explosion);
    }

    #[test]
    fn events_serialize_to_json() {
        let json = serde_json::to_string(&GameEvent::GameOver { final_score: 120 }).unwrap();
        assert!(json.contains("GameOver"));
        assert!(json.contains("120"));
    }
}
