//! # skyfire-headless
//!
//! Runs a Skyfire session without a renderer. A scripted pilot supplies the
//! input and a manual clock advances a fixed amount per step, so a run is
//! reproducible from its seed. With `realtime` set in the run config the
//! driver sleeps between steps and reads the system clock instead.
//!
//! ```text
//! skyfire-headless [run-config.json]
//! ```
//!
//! Logging follows `RUST_LOG` when it is set (for example
//! `RUST_LOG=skyfire_core=debug` adds spawns, volleys and kills). Otherwise
//! one line per notable event is shown.

mod autopilot;
mod config;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use skyfire_core::clock::{Clock, ManualClock, SystemClock};
use skyfire_core::{GameEvent, GameSession, TickReport};

use autopilot::Autopilot;
use config::RunConfig;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "skyfire_core=info,skyfire_headless=info";

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load(&PathBuf::from(path))?,
        None => RunConfig::default(),
    };
    info!(
        seed = config.session.seed,
        ticks = config.ticks,
        frame_ms = config.frame_ms,
        "headless run starting"
    );

    let summary = run(&config)?;
    info!(
        ticks = summary.ticks,
        games = summary.games,
        best_score = summary.best_score,
        last_score = summary.last_score,
        "headless run finished"
    );
    Ok(())
}

/// Builds the log filter from the `RUST_LOG` value, if any.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Where step times come from.
enum FrameClock {
    Simulated(ManualClock),
    RealTime(SystemClock),
}

impl FrameClock {
    fn new(realtime: bool) -> Self {
        if realtime {
            Self::RealTime(SystemClock::new())
        } else {
            Self::Simulated(ManualClock::default())
        }
    }

    fn now_ms(&self) -> u64 {
        match self {
            Self::Simulated(clock) => clock.now_ms(),
            Self::RealTime(clock) => clock.now_ms(),
        }
    }

    /// Moves on by one frame and returns the new time.
    fn next_frame(&mut self, frame_ms: u64) -> u64 {
        match self {
            Self::Simulated(clock) => clock.advance(frame_ms),
            Self::RealTime(_) => thread::sleep(Duration::from_millis(frame_ms)),
        }
        self.now_ms()
    }
}

/// Totals over one headless run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunSummary {
    ticks: u64,
    games: u32,
    best_score: u64,
    last_score: u64,
}

fn run(config: &RunConfig) -> Result<RunSummary> {
    let mut session =
        GameSession::new(config.session.clone()).context("session config rejected")?;
    debug!(config = ?session.config(), "session ready");
    let mut clock = FrameClock::new(config.realtime);
    let mut pilot = Autopilot::new();
    let mut summary = RunSummary {
        games: 1,
        ..RunSummary::default()
    };

    for _ in 0..config.ticks {
        for event in pilot.next_inputs() {
            session.handle_input(event, clock.now_ms());
        }
        let now = clock.next_frame(config.frame_ms);
        let report = session.step(now);
        summary.ticks = report.tick;
        log_report(&report, config.hud_every);

        if report.is_game_over() {
            let score = report.hud.final_score.unwrap_or(report.hud.score);
            summary.best_score = summary.best_score.max(score);
            summary.last_score = score;
            if !config.restart_on_game_over {
                break;
            }
            session.restart();
            pilot.reset();
            summary.games += 1;
        } else {
            summary.last_score = report.hud.score;
            summary.best_score = summary.best_score.max(report.hud.score);
        }
    }
    Ok(summary)
}

fn log_report(report: &TickReport, hud_every: u64) {
    for event in &report.events {
        match event {
            GameEvent::EnemyDestroyed { enemy, .. } => {
                info!(tick = report.tick, %enemy, score = report.hud.score, "enemy destroyed");
            }
            GameEvent::GameOver { final_score } => {
                info!(tick = report.tick, final_score, "game over");
            }
            GameEvent::Restarted => info!(tick = report.tick, "restarted"),
            other => debug!(tick = report.tick, event = ?other, "event"),
        }
    }
    if hud_every > 0 && report.tick % hud_every == 0 {
        let hud = &report.hud;
        info!(
            tick = report.tick,
            score = hud.score,
            health = hud.health,
            band = ?hud.band,
            "hud"
        );
    }
}
