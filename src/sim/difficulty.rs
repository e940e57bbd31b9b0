//! Difficulty curve
//!
//! Pure functions mapping elapsed play time to the current fall speed and
//! spawn cadence. The engine recomputes both every tick.

use crate::consts::*;

/// Fall speed after one tick of `tick_ms`, ramping up from `previous` and
/// saturating at `MAX_FALL_SPEED`.
pub fn fall_speed_after_tick(previous: f32, tick_ms: u64) -> f32 {
    let gained = FALL_SPEED_INCREMENT * tick_ms as f32 / 1000.0;
    (previous + gained).min(MAX_FALL_SPEED)
}

/// Spawn interval for the given elapsed time: steps down by
/// `SPAWN_INTERVAL_DECREMENT_MS` every difficulty step, floored at
/// `MIN_SPAWN_INTERVAL_MS`.
///
/// A change here only lands when the spawn trigger is next rescheduled;
/// an in-flight interval is never cut short or stretched.
pub fn spawn_interval_for(elapsed_ms: u64) -> u64 {
    let steps = elapsed_ms / DIFFICULTY_STEP_MS;
    BASE_SPAWN_INTERVAL_MS
        .saturating_sub(steps.saturating_mul(SPAWN_INTERVAL_DECREMENT_MS))
        .max(MIN_SPAWN_INTERVAL_MS)
}

/// 1-based difficulty level shown in the HUD; advances every difficulty step.
pub fn level(elapsed_ms: u64) -> u32 {
    (elapsed_ms / DIFFICULTY_STEP_MS) as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fall_speed_ramp() {
        // One 50ms tick gains 0.8 * 0.05 = 0.04
        let speed = fall_speed_after_tick(INITIAL_FALL_SPEED, TICK_MS);
        assert!((speed - 5.04).abs() < 1e-6);
    }

    #[test]
    fn test_fall_speed_saturates() {
        assert_eq!(fall_speed_after_tick(MAX_FALL_SPEED, TICK_MS), MAX_FALL_SPEED);
        assert_eq!(fall_speed_after_tick(14.99, 1000), MAX_FALL_SPEED);
    }

    #[test]
    fn test_spawn_interval_steps() {
        assert_eq!(spawn_interval_for(0), 1200);
        assert_eq!(spawn_interval_for(4999), 1200);
        assert_eq!(spawn_interval_for(5000), 1150);
        assert_eq!(spawn_interval_for(20_000), 1000);
        // 21 steps exhaust the decrement: 1200 - 21*50 = 150
        assert_eq!(spawn_interval_for(105_000), 150);
        assert_eq!(spawn_interval_for(10_000_000), MIN_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_level() {
        assert_eq!(level(0), 1);
        assert_eq!(level(4999), 1);
        assert_eq!(level(5000), 2);
        assert_eq!(level(23_000), 5);
    }

    proptest! {
        #[test]
        fn prop_fall_speed_monotone_and_capped(
            previous in 0.0f32..MAX_FALL_SPEED,
            tick_ms in 1u64..1000,
        ) {
            let next = fall_speed_after_tick(previous, tick_ms);
            prop_assert!(next >= previous);
            prop_assert!(next <= MAX_FALL_SPEED);
        }

        #[test]
        fn prop_spawn_interval_matches_closed_form(elapsed in 0u64..10_000_000) {
            let expected = (BASE_SPAWN_INTERVAL_MS as i64
                - (elapsed / DIFFICULTY_STEP_MS) as i64 * SPAWN_INTERVAL_DECREMENT_MS as i64)
                .max(MIN_SPAWN_INTERVAL_MS as i64) as u64;
            prop_assert_eq!(spawn_interval_for(elapsed), expected);
            // Idempotent: same elapsed, same interval
            prop_assert_eq!(spawn_interval_for(elapsed), spawn_interval_for(elapsed));
        }

        #[test]
        fn prop_spawn_interval_non_increasing(elapsed in 0u64..1_000_000) {
            prop_assert!(spawn_interval_for(elapsed + DIFFICULTY_STEP_MS) <= spawn_interval_for(elapsed));
        }
    }
}
