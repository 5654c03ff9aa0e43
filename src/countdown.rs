//! The 3-2-1 countdown between the mini-game and the celebration.

use crate::config::CountdownConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// The year reveal has been up for its full hold. Emitted exactly once.
    Completed,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    /// Current number on screen; 0 means the year reveal.
    pub count: u32,
    interval_ms: u64,
    reveal_ms: u64,
    /// Time into the current number, or into the reveal once `count` is 0.
    elapsed_ms: u64,
    completed: bool,
}

impl Countdown {
    pub fn new(config: &CountdownConfig) -> Self {
        Self {
            count: config.start.max(1),
            interval_ms: config.interval_ms.max(1),
            reveal_ms: config.reveal_ms.max(1),
            elapsed_ms: 0,
            completed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.count == 0
    }

    /// Fraction of the current number (or of the reveal hold) already
    /// elapsed, for pop-in effects.
    pub fn interval_progress(&self) -> f64 {
        let span = if self.is_revealed() {
            self.reveal_ms
        } else {
            self.interval_ms
        };
        self.elapsed_ms as f64 / span as f64
    }

    /// Advance by `dt_ms`; one decrement per elapsed interval.
    ///
    /// The call that reaches zero never completes: the reveal hold starts
    /// fresh from that call, so the reveal is on screen for at least one
    /// frame however long the stall that got there.
    pub fn advance(&mut self, dt_ms: u64) -> Option<CountdownEvent> {
        if self.completed {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.is_revealed() {
            if self.elapsed_ms >= self.reveal_ms {
                self.completed = true;
                return Some(CountdownEvent::Completed);
            }
            return None;
        }

        while self.count > 0 && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            self.count -= 1;
        }
        if self.is_revealed() {
            self.elapsed_ms = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown() -> Countdown {
        Countdown::new(&CountdownConfig::default())
    }

    #[test]
    fn test_counts_down_once_per_interval() {
        let mut cd = countdown();
        assert_eq!(cd.count, 3);
        assert_eq!(cd.advance(999), None);
        assert_eq!(cd.count, 3);
        assert_eq!(cd.advance(1), None);
        assert_eq!(cd.count, 2);
        assert_eq!(cd.advance(1000), None);
        assert_eq!(cd.count, 1);
    }

    #[test]
    fn test_reveal_holds_before_completing() {
        let mut cd = countdown();
        assert_eq!(cd.advance(3000), None);
        assert!(cd.is_revealed());
        assert_eq!(cd.interval_progress(), 0.0);

        assert_eq!(cd.advance(999), None);
        assert!(cd.is_revealed());
        assert_eq!(cd.advance(1), Some(CountdownEvent::Completed));
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut cd = countdown();
        cd.advance(3000);
        assert_eq!(cd.advance(1000), Some(CountdownEvent::Completed));
        assert_eq!(cd.advance(5000), None);
        assert!(cd.is_revealed());
    }

    #[test]
    fn test_long_stall_still_shows_reveal() {
        let mut cd = countdown();
        // Leftover time from the stall does not count toward the reveal
        assert_eq!(cd.advance(60_000), None);
        assert!(cd.is_revealed());
        assert_eq!(cd.advance(60_000), Some(CountdownEvent::Completed));
    }

    #[test]
    fn test_reveal_hold_is_configurable() {
        let mut cd = Countdown::new(&CountdownConfig {
            reveal_ms: 200,
            ..CountdownConfig::default()
        });
        cd.advance(3000);
        assert_eq!(cd.advance(199), None);
        assert_eq!(cd.advance(1), Some(CountdownEvent::Completed));
    }
}
