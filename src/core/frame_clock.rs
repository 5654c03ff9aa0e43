//! Fixed-step tick accumulator.
//!
//! A view that wants per-frame ticks holds a `FrameClock` for as long as it
//! is subscribed. Dropping the clock is the unsubscribe: any time still
//! sitting in the accumulator is discarded with it, so a view that
//! re-acquires a clock later never replays stale time.

use super::constants::{MAX_FRAME_DT_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameClock {
    step_ms: u64,
    accumulated_ms: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl FrameClock {
    /// Create a clock that emits one tick per `step_ms` (minimum 1ms).
    pub fn new(step_ms: u64) -> Self {
        Self {
            step_ms: step_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Feed elapsed wall time and return how many ticks are now due.
    ///
    /// `dt_ms` is clamped to [`MAX_FRAME_DT_MS`] so a long stall does not
    /// turn into a burst of catch-up ticks.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
        let due = self.accumulated_ms / self.step_ms;
        self.accumulated_ms %= self.step_ms;
        due as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_accumulate_across_calls() {
        let mut clock = FrameClock::new(16);
        assert_eq!(clock.advance(10), 0);
        assert_eq!(clock.advance(10), 1);
        assert_eq!(clock.advance(12), 1);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut clock = FrameClock::new(16);
        assert_eq!(clock.advance(10_000), (MAX_FRAME_DT_MS / 16) as u32);
    }

    #[test]
    fn test_zero_step_is_bumped_to_one() {
        let mut clock = FrameClock::new(0);
        assert_eq!(clock.step_ms(), 1);
        assert_eq!(clock.advance(5), 5);
    }
}
