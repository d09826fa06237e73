//! # Skyfire Core
//!
//! Simulation core for Skyfire, an arcade flight shooter.
//!
//! The player flies a craft in a fixed lane, dodging and shooting enemy
//! aircraft that close in from the far plane and collecting stars for score
//! and health. This crate owns the per-frame game state update: spawning,
//! movement and pursuit, projectiles, collisions, health and score, and the
//! Active/Over state machine. Rendering and UI stay outside; they talk to
//! the core through input events, tick reports and snapshots.
//!
//! ## Architecture
//!
//! - **World**: the player craft plus an [`arena::Arena`] of enemies, stars,
//!   shots and effects, keyed by [`entity::EntityId`]
//! - **Resolvers**: movement, projectile, combat and effects systems run in a
//!   fixed order against `&mut World`
//! - **Session**: [`session::GameSession`] pumps spawn timers, runs the
//!   resolvers and reports the outcome of each step
//!
//! ## Usage
//!
//! ```
//! use skyfire_core::config::SessionConfig;
//! use skyfire_core::input::{Button, InputEvent};
//! use skyfire_core::session::GameSession;
//!
//! let mut session = GameSession::new(SessionConfig::default())?;
//! session.handle_input(InputEvent::Pressed(Button::Left), 0);
//!
//! for frame in 1..=60u64 {
//!     let report = session.step(frame * 16);
//!     if report.is_game_over() {
//!         break;
//!     }
//! }
//! assert!(session.world().player.position.x < 0.0);
//! # Ok::<(), skyfire_core::error::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aabb;
pub mod arena;
pub mod clock;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod hud;
pub mod input;
pub mod output;
pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod spawner;
pub mod weapons;
pub mod world;

pub use config::{SessionConfig, StarMotion};
pub use error::ConfigError;
pub use hud::{GamePhase, HealthBand, HudState};
pub use input::{Button, InputEvent};
pub use output::{GameEvent, TickReport};
pub use session::GameSession;

#[cfg(test)]
mod tests;
