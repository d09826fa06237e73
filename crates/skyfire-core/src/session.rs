//! Game session: the per-frame loop and the Active/Over state machine.
//!
//! `GameSession` orchestrates one play session through a fixed per-step
//! order:
//!
//! 1. **SPAWN**: pump the enemy and star timers
//! 2. **SIMULATE**: movement, projectiles and combat (Active phase only)
//! 3. **EFFECTS**: age, expire and spawn effect entities (every phase)
//! 4. **REPORT**: drain notices, effect requests and events into a
//!    [`TickReport`]
//!
//! # Determinism
//!
//! Given the same seed, the same input events and the same `now_ms`
//! sequence, two sessions produce identical reports:
//! - All randomness comes from one seeded `ChaCha8Rng`
//! - Entities are iterated in id order (via `BTreeMap`)
//! - Time only enters through the caller's `now_ms`
//!
//! # Example
//!
//! ```
//! use skyfire_core::config::SessionConfig;
//! use skyfire_core::input::{Button, InputEvent};
//! use skyfire_core::session::GameSession;
//!
//! let mut session = GameSession::new(SessionConfig::with_seed(7)).unwrap();
//!
//! session.handle_input(InputEvent::Pressed(Button::Fire), 0);
//! let report = session.step(16);
//!
//! assert_eq!(report.tick, 1);
//! assert_eq!(session.snapshot().entities.len(), 4); // 3 shots + muzzle flash
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::config::SessionConfig;
use crate::constants::NOMINAL_FPS;
use crate::entity::EntityId;
use crate::error::ConfigError;
use crate::hud::{GamePhase, HudState};
use crate::input::InputEvent;
use crate::output::TickReport;
use crate::resolver::{default_pipeline, FrameContext, Resolver};
use crate::snapshot::RenderSnapshot;
use crate::spawner::{self, Spawner};
use crate::weapons::try_fire_volley;
use crate::world::World;

// =============================================================================
// GameSession
// =============================================================================

/// One play session.
///
/// Owns the world, the spawn timers and the resolver pipeline. All mutation
/// goes through `&mut self`; a host drives it from a single frame loop.
pub struct GameSession {
    /// Validated configuration.
    config: SessionConfig,
    /// All simulation state.
    world: World,
    /// Enemy and star timers.
    spawner: Spawner,
    /// Systems run by `step`, in order.
    resolvers: Vec<Box<dyn Resolver>>,
    /// Clock time of the previous step.
    last_step_ms: Option<u64>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("world", &self.world)
            .field("spawner", &self.spawner)
            .field("resolvers", &format!("[{} resolvers]", self.resolvers.len()))
            .field("last_step_ms", &self.last_step_ms)
            .finish()
    }
}

impl GameSession {
    /// Creates an Active session with timers started at clock time 0.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    ///
    /// # Example
    ///
    /// ```
    /// use skyfire_core::config::SessionConfig;
    /// use skyfire_core::session::GameSession;
    ///
    /// let bad = SessionConfig { enemy_interval_ms: 0, ..SessionConfig::default() };
    /// assert!(GameSession::new(bad).is_err());
    /// ```
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(config.seed),
            spawner: Spawner::new(&config, 0),
            resolvers: default_pipeline(),
            last_step_ms: None,
            config,
        })
    }

    /// Applies one input event at clock time `now_ms`.
    ///
    /// Held buttons are tracked in every phase. A fresh Fire press fires a
    /// volley straight away if the game is active and the cooldown allows.
    /// Returns true if a volley was fired.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) -> bool {
        let now = self.observe_time(now_ms);
        let fire = self.world.player.input.apply(event);
        fire && try_fire_volley(&mut self.world, now)
    }

    /// Runs one tick at clock time `now_ms` and reports what happened.
    ///
    /// A `now_ms` earlier than a previously seen time is treated as that
    /// time, keeping the clock monotonic.
    pub fn step(&mut self, now_ms: u64) -> TickReport {
        let now = self.observe_time(now_ms);
        let frame = FrameContext::new(now, self.frame_delta(now), self.config.star_motion);
        self.last_step_ms = Some(now);

        self.spawner.pump(&mut self.world, now);
        for resolver in &self.resolvers {
            if self.world.is_active() || resolver.runs_when_over() {
                resolver.resolve(&mut self.world, &frame);
            }
        }

        self.world.tick += 1;
        let outbox = self.world.take_outbox();
        trace!(
            tick = self.world.tick,
            entities = self.world.arena.entity_count(),
            events = outbox.events.len(),
            "step"
        );
        TickReport::new(self.world.tick, outbox, self.world.hud())
    }

    /// Leaves the Over phase: clears every entity and puts the player, score
    /// and phase back to their starting values.
    ///
    /// Ignored while the game is active. Returns true if the session was
    /// restarted. Despawn notices and the `Restarted` event go out with the
    /// next step.
    pub fn restart(&mut self) -> bool {
        if self.world.is_active() {
            debug!(score = self.world.score, "restart ignored while active");
            return false;
        }
        self.world.reset();
        true
    }

    /// Spawns an enemy now, outside the timer. `None` if the game is over.
    pub fn spawn_enemy(&mut self) -> Option<EntityId> {
        spawner::spawn_enemy(&mut self.world)
    }

    /// Spawns a star now, outside the timer. `None` if the game is over.
    pub fn spawn_star(&mut self) -> Option<EntityId> {
        spawner::spawn_star(&mut self.world)
    }

    /// Returns the HUD state.
    #[must_use]
    pub fn hud(&self) -> HudState {
        self.world.hud()
    }

    /// Captures a render snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.world)
    }

    /// Returns the session phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    /// Returns true once the player has died and no restart happened yet.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.world.phase == GamePhase::Over
    }

    /// Returns the number of completed steps.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.world.tick
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the world state.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the world state for direct setup.
    ///
    /// Intended for scripted scenarios and tests; gameplay should go through
    /// inputs and steps.
    #[must_use]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Records `now_ms` as the latest clock time and returns the effective
    /// (monotonic) time.
    fn observe_time(&mut self, now_ms: u64) -> u64 {
        self.world.now_ms = self.world.now_ms.max(now_ms);
        self.world.now_ms
    }

    /// Seconds since the previous step, clamped to the configured cap. The
    /// first step counts as one nominal frame.
    #[allow(clippy::cast_precision_loss)]
    fn frame_delta(&self, now: u64) -> f32 {
        let delta = self
            .last_step_ms
            .map_or(1.0 / NOMINAL_FPS, |last| (now - last) as f32 / 1000.0);
        delta.min(self.config.max_frame_delta_secs)
    }
}
