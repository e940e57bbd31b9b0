//! Simulation engine
//!
//! The three operations that mutate a running session. All of them are
//! total: calls made outside the Playing phase are silent no-ops rather
//! than errors, so the presentation layer never has to guard against
//! transition windows.

use rand::Rng;

use super::difficulty::{fall_speed_after_tick, spawn_interval_for};
use super::spawner;
use super::state::{Direction, GamePhase, GameState, Obstacle};
use crate::consts::*;

/// Apply one movement intent to the player. No-op unless Playing.
pub fn apply_movement(state: &mut GameState, direction: Direction) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.player.shift(direction);
}

/// Advance the simulation by one fixed tick of `tick_ms`. No-op unless
/// Playing.
///
/// Order matters: obstacles move and cull first, then the moved positions
/// are collision-tested against the player's unmoved rect. An obstacle can
/// only reach the player's row by advancing, so detection must see the
/// post-move state within the same tick.
pub fn tick(state: &mut GameState, tick_ms: u64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.elapsed_ms += tick_ms;
    state.spawn_interval_ms = spawn_interval_for(state.elapsed_ms);

    let fall_speed = state.fall_speed;
    for obstacle in &mut state.obstacles {
        obstacle.fall(fall_speed);
    }
    state.obstacles.retain(|o| !o.off_screen());

    state.fall_speed = fall_speed_after_tick(state.fall_speed, tick_ms);
    state.score += TICK_SCORE;

    for obstacle in &state.obstacles {
        if state.player.rect.overlaps(&obstacle.rect) {
            state.phase = GamePhase::GameOver;
            log::info!(
                "collision with obstacle {}; final score {}",
                obstacle.id,
                state.score
            );
            return;
        }
    }
}

/// Fire one spawn trigger: draft obstacles for the current elapsed time and
/// append them with fresh IDs. No-op unless Playing.
pub fn spawn_tick(state: &mut GameState, rng: &mut impl Rng) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let drafts = spawner::spawn(state.elapsed_ms, rng);
    if drafts.len() > 1 {
        log::debug!("burst spawn at {}ms", state.elapsed_ms);
    }
    for draft in drafts {
        let id = state.next_obstacle_id();
        state.obstacles.push(Obstacle {
            id,
            rect: draft.rect,
            color: draft.color,
        });
        state.score += SPAWN_SCORE;
    }
}
