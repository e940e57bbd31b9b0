//! Session lifecycle and trigger scheduling
//!
//! Single-threaded cooperative model: the embedding layer calls `advance`
//! with wall-clock deltas and feeds movement intents in between. Two
//! repeating triggers drive the engine while a run is Playing - the
//! fixed-rate simulation tick and the variable-rate spawn trigger. Both are
//! owned by the session and torn down the moment the run leaves Playing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::{self, Direction, GamePhase, GameState};

/// A repeating countdown trigger
#[derive(Debug, Clone)]
struct Trigger {
    due_in_ms: u64,
}

impl Trigger {
    fn new(period_ms: u64) -> Self {
        Self {
            due_in_ms: period_ms,
        }
    }

    /// Reload after firing. A new period takes effect here, never
    /// mid-interval.
    fn reschedule(&mut self, period_ms: u64) {
        self.due_in_ms = period_ms;
    }
}

/// Both periodic triggers; exist only while the session is Playing
#[derive(Debug, Clone)]
struct Triggers {
    tick: Trigger,
    spawn: Trigger,
}

/// A game session: the one live `GameState`, the RNG feeding the spawner,
/// and the periodic triggers.
///
/// The session is the sole authority for entering Playing; the engine only
/// flags the collision that ends a run.
pub struct Session<R: Rng = Pcg32> {
    state: GameState,
    rng: R,
    triggers: Option<Triggers>,
}

impl Session<Pcg32> {
    /// Create a session on the start screen. The seed feeds obstacle
    /// generation; pass entropy for normal play, a fixed value in tests.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create a session with an injected random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
            triggers: None,
        }
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    /// Begin a run, replacing any previous session state wholesale.
    /// No-op while a run is already Playing.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Playing {
            return;
        }

        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        let spawn_interval_ms = state.spawn_interval_ms;
        self.state = state;
        self.triggers = Some(Triggers {
            tick: Trigger::new(TICK_MS),
            spawn: Trigger::new(spawn_interval_ms),
        });
        log::info!("session started");
    }

    /// Restart after game over; identical to `start`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Forward a movement intent. Applied immediately, interleaved with
    /// trigger firings on the same timeline.
    pub fn apply_movement(&mut self, direction: Direction) {
        sim::apply_movement(&mut self.state, direction);
    }

    /// Advance the session clock by `frame_ms` of wall time, firing due
    /// triggers in deadline order. A long stall is capped at
    /// `MAX_CATCHUP_TICKS` worth of simulation instead of replayed in full.
    pub fn advance(&mut self, frame_ms: u64) {
        let Some(triggers) = self.triggers.as_mut() else {
            return;
        };

        let mut budget = frame_ms.min(TICK_MS * MAX_CATCHUP_TICKS as u64);
        while budget > 0 {
            let step = budget
                .min(triggers.tick.due_in_ms)
                .min(triggers.spawn.due_in_ms);
            triggers.tick.due_in_ms -= step;
            triggers.spawn.due_in_ms -= step;
            budget -= step;

            if triggers.tick.due_in_ms == 0 {
                sim::tick(&mut self.state, TICK_MS);
                triggers.tick.reschedule(TICK_MS);
            }
            if self.state.phase != GamePhase::Playing {
                break;
            }
            if triggers.spawn.due_in_ms == 0 {
                sim::spawn_tick(&mut self.state, &mut self.rng);
                // Pick up whatever interval the difficulty curve now says;
                // the change lands here, never mid-interval
                triggers.spawn.reschedule(self.state.spawn_interval_ms);
            }
        }

        if self.state.phase != GamePhase::Playing {
            // Tear down both triggers; tearing down already-stopped
            // triggers is a no-op
            self.triggers = None;
        }
    }
}
