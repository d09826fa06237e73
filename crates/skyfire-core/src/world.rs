//! World state: the player craft, the entity registry, score and phase.
//!
//! Every subsystem takes `&mut World`. The world owns the session RNG so
//! spawn placement and enemy fire rolls draw from one reproducible stream.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::aabb::{Aabb, PLAYER_HALF_EXTENTS};
use crate::arena::Arena;
use crate::constants::MAX_HEALTH;
use crate::entity::{EffectKind, EntityId};
use crate::hud::{GamePhase, HudState};
use crate::input::InputState;
use crate::output::{EffectRequest, GameEvent, Outbox};

// =============================================================================
// PlayerCraft
// =============================================================================

/// The single player aircraft.
///
/// Lives outside the arena under the reserved id [`EntityId::PLAYER`]; it is
/// reset in place on restart and never despawned.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCraft {
    /// World position. x in [-10, 10], y in [-5, 5], z stays 0.
    pub position: Vec3,
    /// Visual tilt: `x` is pitch, `z` is roll.
    pub rotation: Vec3,
    /// Health, 0..=350.
    pub health: u32,
    /// Held buttons.
    pub input: InputState,
    /// Clock time of the last accepted volley.
    pub last_fire_ms: Option<u64>,
    /// Accumulated propeller angle (visual).
    pub propeller_angle: f32,
}

impl Default for PlayerCraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerCraft {
    /// Creates a craft at the origin with full health.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            health: MAX_HEALTH,
            input: InputState::new(),
            last_fire_ms: None,
            propeller_angle: 0.0,
        }
    }

    /// Returns the player's entity id.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        EntityId::PLAYER
    }

    /// Returns the player's collision box.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, PLAYER_HALF_EXTENTS)
    }

    /// Subtracts `amount` health, flooring at zero. Returns what is left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Adds `amount` health, capped at [`MAX_HEALTH`].
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }

    /// Returns true once health is zero.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Puts the craft back at its starting state. Held buttons survive so a
    /// player still pressing a key keeps moving after a restart.
    pub fn reset(&mut self) {
        let input = self.input;
        *self = Self::new();
        self.input = input;
    }
}

// =============================================================================
// World
// =============================================================================

/// Effect request waiting to become a registry entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingEffect {
    /// The request.
    pub request: EffectRequest,
    /// Clock time it was raised at.
    pub requested_at_ms: u64,
}

/// All mutable state of one session.
#[derive(Debug, Clone)]
pub struct World {
    /// Transient entities.
    pub arena: Arena,
    /// The player.
    pub player: PlayerCraft,
    /// Current score.
    pub score: u64,
    /// Current phase.
    pub phase: GamePhase,
    /// Score recorded at the last game over.
    pub final_score: Option<u64>,
    /// Completed steps.
    pub tick: u64,
    /// Latest clock time seen by the session.
    pub now_ms: u64,
    /// Session RNG.
    pub rng: ChaCha8Rng,
    /// Outputs collected since the last report.
    pub outbox: Outbox,
    /// Effects requested but not yet spawned.
    pub pending_effects: Vec<PendingEffect>,
}

impl World {
    /// Creates an active world with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            arena: Arena::new(),
            player: PlayerCraft::new(),
            score: 0,
            phase: GamePhase::Active,
            final_score: None,
            tick: 0,
            now_ms: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            outbox: Outbox::default(),
            pending_effects: Vec::new(),
        }
    }

    /// Returns true while the phase is Active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Adds points. Ignored once the game is over.
    pub fn add_score(&mut self, points: u64) {
        if self.is_active() {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Requests an effect: reported to the renderer and spawned as an
    /// effect entity on the next effects pass.
    pub fn request_effect(&mut self, kind: EffectKind, position: Vec3) {
        self.outbox.effect(kind, position);
        self.pending_effects.push(PendingEffect {
            request: EffectRequest { kind, position },
            requested_at_ms: self.now_ms,
        });
    }

    /// Queues a gameplay event.
    pub fn emit(&mut self, event: GameEvent) {
        self.outbox.event(event);
    }

    /// Moves to the Over phase and records the final score. No-op if the
    /// game is already over.
    pub fn game_over(&mut self) {
        if !self.is_active() {
            return;
        }
        self.phase = GamePhase::Over;
        self.final_score = Some(self.score);
        self.emit(GameEvent::GameOver {
            final_score: self.score,
        });
        info!(tick = self.tick, score = self.score, "game over");
    }

    /// Clears every transient entity and resets player, score and phase.
    ///
    /// The RNG and tick counter continue; entity ids are not reused.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.pending_effects.clear();
        self.player.reset();
        self.score = 0;
        self.phase = GamePhase::Active;
        self.final_score = None;
        self.emit(GameEvent::Restarted);
        info!(tick = self.tick, "session restarted");
    }

    /// Returns the HUD state for the current world.
    #[must_use]
    pub fn hud(&self) -> HudState {
        HudState::new(self.score, self.player.health, self.phase, self.final_score)
    }

    /// Drains the outbox, folding in the registry notices.
    pub fn take_outbox(&mut self) -> Outbox {
        let mut outbox = self.outbox.take();
        outbox.notices = self.arena.take_notices();
        outbox
    }
}
