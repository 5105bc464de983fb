//! Auto-fire targeting: nearest-target selection and aim solution.

use arena_core::types::{Position, Velocity};

/// Index and distance of the candidate closest to `origin`.
///
/// Ties keep the earliest candidate. Returns `None` for an empty input.
pub fn nearest<I>(origin: Position, candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Position>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, pos) in candidates.into_iter().enumerate() {
        let distance = origin.distance_to(&pos);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best
}

/// Velocity of a projectile leaving `from` toward `to` at `speed` units per tick.
///
/// Returns `None` when both points coincide; a zero-velocity bolt is never fired.
pub fn aim_velocity(from: Position, to: Position, speed: f64) -> Option<Velocity> {
    let direction = (to.as_dvec2() - from.as_dvec2()).try_normalize()?;
    Some(Velocity::from(direction * speed))
}
