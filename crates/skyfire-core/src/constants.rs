//! Gameplay tuning constants.
//!
//! Distances are world units, angles are radians, and "per tick" values are
//! applied once per simulation step regardless of frame time unless noted.

// --- Player ---

/// Maximum (and starting) player health.
pub const MAX_HEALTH: u32 = 350;
/// Per-axis displacement for each held direction button, per tick.
pub const PLAYER_MOVE_SPEED: f32 = 0.15;
/// Horizontal clamp for the player (`|x| <= PLAYER_BOUND_X`).
pub const PLAYER_BOUND_X: f32 = 10.0;
/// Vertical clamp for the player (`|y| <= PLAYER_BOUND_Y`).
pub const PLAYER_BOUND_Y: f32 = 5.0;
/// Roll target while banking left (negated for right).
pub const PLAYER_ROLL_TARGET: f32 = 0.3;
/// Pitch target while climbing (negated for diving).
pub const PLAYER_PITCH_TARGET: f32 = 0.2;
/// Propeller spin per tick.
pub const PLAYER_PROPELLER_SPIN: f32 = 0.3;
/// Lerp factor used for all smoothed visual rotations.
pub const ROTATION_SMOOTHING: f32 = 0.1;

// --- Player weapons ---

/// Minimum milliseconds between two volleys.
pub const VOLLEY_COOLDOWN_MS: u64 = 300;
/// Lateral offsets of the three shots in a volley.
pub const VOLLEY_OFFSETS: [f32; 3] = [0.0, -0.4, 0.4];
/// Forward speed of player shots (towards -z).
pub const PLAYER_SHOT_SPEED: f32 = 2.5;
/// Damage dealt by one player shot.
pub const PLAYER_SHOT_DAMAGE: u32 = 50;

// --- Enemies ---

/// Starting enemy health.
pub const ENEMY_HEALTH: i32 = 70;
/// Spawn depth of new enemies.
pub const ENEMY_SPAWN_Z: f32 = -70.0;
/// Spawn half-width on x.
pub const ENEMY_SPAWN_X: f32 = 10.0;
/// Spawn half-height on y.
pub const ENEMY_SPAWN_Y: f32 = 5.0;
/// Minimum pursuit speed; a uniform `[0, ENEMY_SPEED_JITTER)` is added.
pub const ENEMY_SPEED_BASE: f32 = 0.4;
/// Pursuit speed jitter.
pub const ENEMY_SPEED_JITTER: f32 = 0.3;
/// Minimum turn rate; a uniform `[0, ENEMY_TURN_RATE_JITTER)` is added.
pub const ENEMY_TURN_RATE_BASE: f32 = 0.01;
/// Turn rate jitter.
pub const ENEMY_TURN_RATE_JITTER: f32 = 0.02;
/// Minimum propeller spin per tick.
pub const ENEMY_PROPELLER_BASE: f32 = 0.3;
/// Propeller spin jitter.
pub const ENEMY_PROPELLER_JITTER: f32 = 0.1;
/// World scroll speed shared by enemies and stars.
pub const WORLD_SPEED: f32 = 0.5;
/// Fraction of [`WORLD_SPEED`] enemies close in on the player per tick.
pub const ENEMY_APPROACH_FACTOR: f32 = 0.8;
/// Enemies and stars with `z` strictly greater than this have passed the player.
pub const ESCAPE_Z: f32 = 10.0;
/// Enemies only shoot while `z` is strictly inside `(ENEMY_FIRE_MIN_Z, ENEMY_FIRE_MAX_Z)`.
pub const ENEMY_FIRE_MIN_Z: f32 = -50.0;
/// Upper edge of the enemy firing window.
pub const ENEMY_FIRE_MAX_Z: f32 = 5.0;
/// Per-tick probability an in-range enemy attempts a shot.
pub const ENEMY_FIRE_CHANCE: f64 = 0.01;
/// Minimum milliseconds between two shots of the same enemy.
pub const ENEMY_FIRE_COOLDOWN_MS: u64 = 1200;
/// Speed of enemy shots.
pub const ENEMY_SHOT_SPEED: f32 = 1.5;
/// Damage dealt by one enemy shot.
pub const ENEMY_SHOT_DAMAGE: u32 = 70;

// --- Projectiles ---

/// Ticks a projectile lives before expiring.
pub const PROJECTILE_LIFETIME: u32 = 100;
/// Projectiles with `|x|` or `|y|` above this are out of bounds.
pub const PROJECTILE_BOUND_XY: f32 = 50.0;
/// Player shots with `z` below this are out of bounds.
pub const PLAYER_SHOT_MIN_Z: f32 = -100.0;
/// Enemy shots with `z` above this are out of bounds.
pub const ENEMY_SHOT_MAX_Z: f32 = 20.0;

// --- Stars ---

/// Spawn depth of new stars.
pub const STAR_SPAWN_Z: f32 = -50.0;
/// Spawn half-width on x.
pub const STAR_SPAWN_X: f32 = 8.0;
/// Spawn half-height on y.
pub const STAR_SPAWN_Y: f32 = 4.0;
/// Star spin per nominal frame around y (x spins at half this rate).
pub const STAR_SPIN: f32 = 0.03;
/// Multiplier converting `WORLD_SPEED * seconds` into star drift.
pub const STAR_DRIFT_SCALE: f32 = 30.0;
/// Frame rate the per-frame star spin is expressed against.
pub const NOMINAL_FPS: f32 = 60.0;

// --- Scoring ---

/// Score for destroying an enemy.
pub const SCORE_ENEMY_DESTROYED: u64 = 50;
/// Score for collecting a star.
pub const SCORE_STAR_COLLECTED: u64 = 10;
/// Health restored by a star.
pub const STAR_HEAL: u32 = 15;

// --- Spawn timers ---

/// Default milliseconds between enemy spawns.
pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 5000;
/// Default milliseconds between star spawns.
pub const STAR_SPAWN_INTERVAL_MS: u64 = 3000;

// --- Effects ---

/// Ticks an explosion stays visible.
pub const EXPLOSION_LIFETIME_TICKS: u32 = 60;
/// Ticks a hit spark stays visible.
pub const HIT_LIFETIME_TICKS: u32 = 20;
/// Wall-clock milliseconds a muzzle flash stays visible.
pub const MUZZLE_FLASH_MS: u64 = 50;

// --- HUD ---

/// Health percentage above which the bar is healthy.
pub const HEALTH_BAND_HEALTHY: f32 = 60.0;
/// Health percentage above which the bar is a warning (and below healthy).
pub const HEALTH_BAND_WARNING: f32 = 30.0;
