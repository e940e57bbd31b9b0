//! Game state and core simulation types
//!
//! Everything the presentation layer needs to render a frame lives here.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run yet; waiting on the start screen
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended on collision
    GameOver,
}

/// Horizontal movement intent from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Obstacle color tag; the presentation layer maps these to its own styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleColor {
    Pink,
    Purple,
    Orange,
    Red,
}

impl ObstacleColor {
    /// The fixed spawn palette
    pub const PALETTE: [ObstacleColor; 4] = [Self::Pink, Self::Purple, Self::Orange, Self::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleColor::Pink => "pink",
            ObstacleColor::Purple => "purple",
            ObstacleColor::Orange => "orange",
            ObstacleColor::Red => "red",
        }
    }
}

/// The player's ship
///
/// Only x moves; the ship is pinned to its row for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        // Centered horizontally on the fixed row near the bottom
        Self {
            rect: Rect::new(
                (FIELD_WIDTH - PLAYER_WIDTH) / 2.0,
                PLAYER_Y,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
        }
    }
}

impl Player {
    /// Shift one step left or right, clamped to the field bounds
    pub fn shift(&mut self, direction: Direction) {
        let dx = match direction {
            Direction::Left => -PLAYER_STEP,
            Direction::Right => PLAYER_STEP,
        };
        self.rect.pos.x = (self.rect.pos.x + dx).clamp(0.0, FIELD_WIDTH - self.rect.size.x);
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Unique within one session; the presentation layer keys on it
    pub id: u32,
    pub rect: Rect,
    pub color: ObstacleColor,
}

impl Obstacle {
    /// Advance downward by the current fall speed
    pub fn fall(&mut self, fall_speed: f32) {
        self.rect.pos.y += fall_speed;
    }

    /// Past the bottom edge of the field; safe to cull
    pub fn off_screen(&self) -> bool {
        self.rect.pos.y >= FIELD_HEIGHT
    }
}

/// Complete session state, handed to the presentation layer as a read-only
/// snapshot after every mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    /// Simulated play time in milliseconds
    pub elapsed_ms: u64,
    /// Vertical distance obstacles cover per tick
    pub fall_speed: f32,
    /// Current period of the spawn trigger
    pub spawn_interval_ms: u64,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Fresh state on the start screen
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0,
            elapsed_ms: 0,
            fall_speed: INITIAL_FALL_SPEED,
            spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            player: Player::default(),
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate an obstacle ID, unique for the lifetime of this session
    pub(crate) fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// 1-based difficulty level derived from elapsed time
    pub fn level(&self) -> u32 {
        super::difficulty::level(self.elapsed_ms)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.elapsed_ms, 0);
        assert_eq!(state.fall_speed, INITIAL_FALL_SPEED);
        assert_eq!(state.spawn_interval_ms, BASE_SPAWN_INTERVAL_MS);
        assert!(state.obstacles.is_empty());
        // Centered: (300 - 40) / 2
        assert_eq!(state.player.rect.pos.x, 130.0);
        assert_eq!(state.player.rect.pos.y, 320.0);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn test_player_shift_clamps() {
        let mut player = Player::default();
        player.shift(Direction::Left);
        assert_eq!(player.rect.pos.x, 105.0);

        for _ in 0..10 {
            player.shift(Direction::Left);
        }
        assert_eq!(player.rect.pos.x, 0.0);
        player.shift(Direction::Left);
        assert_eq!(player.rect.pos.x, 0.0);

        for _ in 0..20 {
            player.shift(Direction::Right);
        }
        assert_eq!(player.rect.pos.x, FIELD_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_obstacle_ids_unique() {
        let mut state = GameState::new();
        let a = state.next_obstacle_id();
        let b = state.next_obstacle_id();
        let c = state.next_obstacle_id();
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_snapshot_serializes() {
        // The presentation layer ships snapshots as JSON
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
        assert!(json.contains("\"score\":0"));
    }
}
