//! Movement rules for the player and for chasing hostiles.

use glam::DVec2;

use arena_core::input::InputVector;
use arena_core::types::Position;

/// Displacement produced by one tick of directional input.
///
/// Each axis moves by `speed` independently, so a diagonal covers `speed·√2`
/// unless `normalize_diagonal` rescales it to `speed`.
pub fn player_displacement(input: &InputVector, speed: f64, normalize_diagonal: bool) -> DVec2 {
    let (ax, ay) = input.axes();
    let step = DVec2::new(ax, ay) * speed;
    if normalize_diagonal && ax != 0.0 && ay != 0.0 {
        step.normalize_or_zero() * speed
    } else {
        step
    }
}

/// Next position of a hostile moving `speed` units straight at `target`.
///
/// Returns `None` when the hostile already sits on the target: the direction
/// is undefined and the hostile holds still for the tick.
pub fn chase_step(from: Position, target: Position, speed: f64) -> Option<Position> {
    let offset = target.as_dvec2() - from.as_dvec2();
    let distance = offset.length();
    if distance <= 0.0 || !distance.is_finite() {
        return None;
    }
    Some(Position::from(from.as_dvec2() + offset / distance * speed))
}
