//! Obstacle spawner
//!
//! Invoked on each spawn-trigger firing. Produces one obstacle per firing,
//! or two once the elapsed time starts granting burst chances.

use rand::Rng;

use super::rect::Rect;
use super::state::ObstacleColor;
use crate::consts::*;

/// A drafted obstacle, before the engine assigns its session-unique ID
#[derive(Debug, Clone)]
pub struct ObstacleDraft {
    pub rect: Rect,
    pub color: ObstacleColor,
}

/// Chance that a firing produces a second obstacle. Grows by
/// `BURST_CHANCE_PER_STEP` per burst step; values past 1.0 simply always
/// win the draw.
fn burst_chance(elapsed_ms: u64) -> f32 {
    (elapsed_ms / BURST_STEP_MS) as f32 * BURST_CHANCE_PER_STEP
}

/// Draft the obstacles for one spawn-trigger firing.
///
/// A burst's second obstacle starts a stagger above the first so the pair
/// never spawns overlapped.
pub fn spawn(elapsed_ms: u64, rng: &mut impl Rng) -> Vec<ObstacleDraft> {
    let count = if rng.random::<f32>() < burst_chance(elapsed_ms) {
        2
    } else {
        1
    };

    (0..count)
        .map(|i| {
            let width = rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
            let x = rng.random_range(0.0..FIELD_WIDTH - width);
            let y = -OBSTACLE_HEIGHT - i as f32 * OBSTACLE_HEIGHT * BURST_STAGGER;
            let color = ObstacleColor::PALETTE[rng.random_range(0..ObstacleColor::PALETTE.len())];
            ObstacleDraft {
                rect: Rect::new(x, y, width, OBSTACLE_HEIGHT),
                color,
            }
        })
        .collect()
}
