//! Simulation constants and tuning defaults.
//!
//! Everything a variant may change lives in `ArenaConfig`; these values are
//! the classic defaults it starts from.

/// Nominal host frame rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per nominal frame.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- World ---

/// World width in world units.
pub const WORLD_WIDTH: f64 = 5000.0;

/// World height in world units.
pub const WORLD_HEIGHT: f64 = 5000.0;

/// Default viewport width used for the published camera rectangle.
pub const VIEWPORT_WIDTH: f64 = 1000.0;

/// Default viewport height used for the published camera rectangle.
pub const VIEWPORT_HEIGHT: f64 = 600.0;

// --- Player ---

/// Player speed (units per tick, per axis).
pub const PLAYER_SPEED: f64 = 4.0;

pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Damage dealt per projectile hit.
pub const PLAYER_DAMAGE: i32 = 25;

/// Moving ticks counted past this value advance the walk frame.
pub const ANIMATION_TICK_THRESHOLD: u32 = 8;

/// Walk cycle length for the classic sprite.
pub const ANIMATION_FRAMES: u32 = 2;

// --- Hostiles ---

pub const HOSTILE_HEALTH: i32 = 100;

/// Hostile chase speed (units per tick).
pub const HOSTILE_SPEED: f64 = 1.5;

/// Default initial population.
pub const INITIAL_HOSTILES: u32 = 6;

/// Inner radius of the spawn annulus around the player.
pub const SPAWN_MIN_DISTANCE: f64 = 300.0;

/// Outer radius of the spawn annulus around the player.
pub const SPAWN_MAX_DISTANCE: f64 = 500.0;

/// Elite roll probability used by the elite-enabled variants.
pub const ELITE_PROBABILITY: f64 = 0.15;

pub const ELITE_HEALTH_MULTIPLIER: f64 = 2.0;

pub const ELITE_SPEED_MULTIPLIER: f64 = 1.6;

// --- Auto-fire ---

/// Minimum time between auto-fired projectiles (ms).
pub const SHOT_COOLDOWN_MS: f64 = 500.0;

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 8.0;

/// Projectile lifetime (ticks).
pub const PROJECTILE_LIFE: u32 = 120;

/// Projectile-hostile hit distance (strictly less than).
pub const HIT_RADIUS: f64 = 20.0;

// --- Loot ---

/// Drop roll probability used by the loot-enabled variant.
pub const LOOT_PROBABILITY: f64 = 0.5;
