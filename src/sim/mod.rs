//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use difficulty::{fall_speed_after_tick, level, spawn_interval_for};
pub use rect::Rect;
pub use spawner::{ObstacleDraft, spawn};
pub use state::{Direction, GamePhase, GameState, Obstacle, ObstacleColor, Player};
pub use tick::{apply_movement, spawn_tick, tick};
