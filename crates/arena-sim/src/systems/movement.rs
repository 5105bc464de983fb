//! Movement system.
//!
//! Moves the player from directional input, advances the walk cycle, and
//! steps every hostile straight at the player.

use arena_core::components::{AnimationState, Hostile, Player};
use arena_core::config::ArenaConfig;
use arena_core::constants::ANIMATION_TICK_THRESHOLD;
use arena_core::input::InputVector;
use arena_core::types::Position;
use arena_steering::chase::{chase_step, player_displacement};

use crate::store::EntityStore;

/// Run player and hostile movement. Returns whether the player was moving.
pub fn run(store: &mut EntityStore, input: &InputVector, config: &ArenaConfig) -> bool {
    let moving = move_player(store.player_mut(), input, config);
    move_hostiles(store);
    moving
}

/// Apply one tick of directional input to the player.
///
/// Stationary ticks leave both position and animation untouched.
pub fn move_player(player: &mut Player, input: &InputVector, config: &ArenaConfig) -> bool {
    if !input.is_moving() {
        return false;
    }

    let step = player_displacement(input, player.speed, config.normalize_diagonal);
    let next = Position::from(player.position.as_dvec2() + step);
    player.position = if config.confine_player {
        config.bounds().clamp(next)
    } else {
        next
    };

    advance_animation(&mut player.animation, config.animation_frames);
    true
}

/// Count one moving tick; every ninth flips to the next walk frame.
pub fn advance_animation(animation: &mut AnimationState, frames: u32) {
    animation.tick += 1;
    if animation.tick > ANIMATION_TICK_THRESHOLD {
        animation.frame = (animation.frame + 1) % frames.max(1);
        animation.tick = 0;
    }
}

/// Step one hostile toward `target`. A hostile already on the target holds still.
pub fn move_hostile(position: &mut Position, hostile: &Hostile, target: Position) -> bool {
    match chase_step(*position, target, hostile.speed) {
        Some(next) => {
            *position = next;
            true
        }
        None => false,
    }
}

/// Step every hostile toward the player's current position.
pub fn move_hostiles(store: &mut EntityStore) {
    let target = store.player().position;
    for (_entity, (pos, hostile)) in store.world_mut().query_mut::<(&mut Position, &Hostile)>() {
        move_hostile(pos, hostile, target);
    }
}
