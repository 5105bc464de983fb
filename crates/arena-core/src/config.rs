//! Simulation configuration.
//!
//! One `ArenaConfig` parameterizes the whole core; the three game variants
//! are presets of it rather than separate code paths.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::SpellType;
use crate::types::{Position, WorldBounds};

/// Where replacement and seed hostiles are placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Random angle, random distance in `[min_distance, max_distance]` around the player.
    Annulus { min_distance: f64, max_distance: f64 },
    /// Uniformly random point inside the world bounds.
    Uniform,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::Annulus {
            min_distance: SPAWN_MIN_DISTANCE,
            max_distance: SPAWN_MAX_DISTANCE,
        }
    }
}

/// What happens to the population when a hostile dies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplenishPolicy {
    /// Spawn exactly one replacement per kill.
    #[default]
    SpawnOnKill,
    /// Never replace; the seeded population decays.
    FixedPopulation,
}

/// Named presets for the three shipped game variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Annulus spawns, endless replacements, no elites, no loot.
    #[default]
    Classic,
    /// Uniform spawns over a fixed, larger population with elites.
    Horde,
    /// Elites and loot drops with a four-frame walk cycle.
    Treasure,
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("shot cooldown must not be negative, got {0}")]
    NegativeCooldown(f64),
    #[error("spawn band is invalid: min {min} max {max}")]
    InvalidSpawnBand { min: f64, max: f64 },
    #[error("projectile life must be at least one tick")]
    ZeroProjectileLife,
    #[error("animation needs at least one frame")]
    ZeroAnimationFrames,
}

/// Full set of tunables recognized by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed. Same seed and inputs give the same simulation.
    pub seed: u64,
    pub world_width: f64,
    pub world_height: f64,
    /// Player spawn point; `None` means the world centre.
    pub player_start: Option<Position>,
    pub player_speed: f64,
    pub player_max_health: i32,
    pub player_damage: i32,
    pub starting_spell: SpellType,
    /// Walk-cycle length (the sprites use 2 or 4).
    pub animation_frames: u32,
    /// Scale diagonal input so it moves at `player_speed` instead of `speed·√2`.
    pub normalize_diagonal: bool,
    /// Clamp the player into the world bounds after moving.
    pub confine_player: bool,
    pub initial_hostiles: u32,
    pub replenish: ReplenishPolicy,
    pub spawn_policy: SpawnPolicy,
    pub hostile_health: i32,
    pub hostile_speed: f64,
    pub elite_probability: f64,
    pub elite_health_multiplier: f64,
    pub elite_speed_multiplier: f64,
    pub loot_probability: f64,
    pub shot_cooldown_ms: f64,
    pub projectile_speed: f64,
    /// Projectile lifetime in ticks.
    pub projectile_life: u32,
    pub hit_radius: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            player_start: None,
            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            player_damage: PLAYER_DAMAGE,
            starting_spell: SpellType::Arcane,
            animation_frames: ANIMATION_FRAMES,
            normalize_diagonal: false,
            confine_player: true,
            initial_hostiles: INITIAL_HOSTILES,
            replenish: ReplenishPolicy::SpawnOnKill,
            spawn_policy: SpawnPolicy::default(),
            hostile_health: HOSTILE_HEALTH,
            hostile_speed: HOSTILE_SPEED,
            elite_probability: 0.0,
            elite_health_multiplier: ELITE_HEALTH_MULTIPLIER,
            elite_speed_multiplier: ELITE_SPEED_MULTIPLIER,
            loot_probability: 0.0,
            shot_cooldown_ms: SHOT_COOLDOWN_MS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_life: PROJECTILE_LIFE,
            hit_radius: HIT_RADIUS,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl ArenaConfig {
    /// Configuration for one of the shipped variants.
    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::default(),
            Variant::Horde => Self {
                initial_hostiles: 15,
                replenish: ReplenishPolicy::FixedPopulation,
                spawn_policy: SpawnPolicy::Uniform,
                elite_probability: ELITE_PROBABILITY,
                starting_spell: SpellType::Lightning,
                ..Self::default()
            },
            Variant::Treasure => Self {
                initial_hostiles: 10,
                elite_probability: ELITE_PROBABILITY,
                loot_probability: LOOT_PROBABILITY,
                animation_frames: 4,
                starting_spell: SpellType::Fire,
                ..Self::default()
            },
        }
    }

    /// Parse and validate a JSON document. Missing fields take classic defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    /// Player spawn point.
    pub fn player_start(&self) -> Position {
        self.player_start.unwrap_or_else(|| self.bounds().center())
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("player_speed", self.player_speed)?;
        positive("player_max_health", self.player_max_health as f64)?;
        positive("player_damage", self.player_damage as f64)?;
        positive("hostile_health", self.hostile_health as f64)?;
        positive("hostile_speed", self.hostile_speed)?;
        positive("elite_health_multiplier", self.elite_health_multiplier)?;
        positive("elite_speed_multiplier", self.elite_speed_multiplier)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("hit_radius", self.hit_radius)?;
        probability("elite_probability", self.elite_probability)?;
        probability("loot_probability", self.loot_probability)?;

        if !(self.shot_cooldown_ms >= 0.0) {
            return Err(ConfigError::NegativeCooldown(self.shot_cooldown_ms));
        }
        if self.projectile_life == 0 {
            return Err(ConfigError::ZeroProjectileLife);
        }
        if self.animation_frames == 0 {
            return Err(ConfigError::ZeroAnimationFrames);
        }
        if let SpawnPolicy::Annulus {
            min_distance,
            max_distance,
        } = self.spawn_policy
        {
            if !(min_distance >= 0.0 && min_distance <= max_distance) {
                return Err(ConfigError::InvalidSpawnBand {
                    min: min_distance,
                    max: max_distance,
                });
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // Negated comparison so NaN is rejected too.
    if !(value > 0.0) {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}
