//! Debris Dodge - a falling-debris dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (difficulty curve, spawning, collision, game state)
//! - `session`: Session lifecycle and the periodic tick/spawn triggers
//!
//! Rendering, input binding, and process bootstrap live in the embedding
//! presentation layer. This crate only advances state and hands out
//! read-only snapshots of it.

pub mod session;
pub mod sim;

pub use session::Session;
pub use sim::{Direction, GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period (~20 Hz)
    pub const TICK_MS: u64 = 50;
    /// Maximum ticks replayed in one `advance` call to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 8;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 300.0;
    pub const FIELD_HEIGHT: f32 = 360.0;

    /// Player defaults - the ship sits on a fixed row near the bottom
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_Y: f32 = FIELD_HEIGHT - PLAYER_HEIGHT - 20.0;
    /// Horizontal distance covered by one movement intent
    pub const PLAYER_STEP: f32 = 25.0;

    /// Obstacle defaults
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 20.0;

    /// Fall speed ramp (pixels per tick)
    pub const INITIAL_FALL_SPEED: f32 = 5.0;
    /// Fall speed gained per second of play
    pub const FALL_SPEED_INCREMENT: f32 = 0.8;
    pub const MAX_FALL_SPEED: f32 = 15.0;

    /// Spawn cadence ramp
    pub const BASE_SPAWN_INTERVAL_MS: u64 = 1200;
    pub const MIN_SPAWN_INTERVAL_MS: u64 = 150;
    /// Interval shrink per difficulty step
    pub const SPAWN_INTERVAL_DECREMENT_MS: u64 = 50;
    /// Elapsed time per difficulty step (one HUD level)
    pub const DIFFICULTY_STEP_MS: u64 = 5000;

    /// Burst spawns
    pub const BURST_STEP_MS: u64 = 10_000;
    /// Extra chance of a two-obstacle burst gained per burst step
    pub const BURST_CHANCE_PER_STEP: f32 = 0.1;
    /// Vertical stagger between burst obstacles, in obstacle heights
    pub const BURST_STAGGER: f32 = 1.5;

    /// Score per spawned obstacle (survival/exposure reward)
    pub const SPAWN_SCORE: u64 = 10;
    /// Score per simulation tick survived
    pub const TICK_SCORE: u64 = 1;
}
