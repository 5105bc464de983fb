//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space. x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned world rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks that ran the update phase.
    pub tick: u64,
    /// Accumulated frame time of those ticks (ms).
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Translate by a velocity for one tick.
    pub fn advance(&mut self, velocity: &Velocity) {
        self.x += velocity.x;
        self.y += velocity.y;
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    /// Clamp a position onto the rectangle.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(
            crate::constants::WORLD_WIDTH,
            crate::constants::WORLD_HEIGHT,
        )
    }
}

impl SimTime {
    /// Advance by one tick lasting `dt_ms`.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}
