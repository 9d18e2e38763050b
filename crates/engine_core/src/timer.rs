//! Cancellable timers for deferred and repeating work.
//!
//! Held-button rapid fire and spawn run off a [`Repeating`] owned by whoever
//! started it; releasing the button (or tearing the scene down) cancels or
//! drops the timer, so no callback can keep mutating state afterwards.

use crate::time::Millis;

/// A repeating schedule: fires every `interval_ms` once armed.
#[derive(Debug, Clone)]
pub struct Repeating {
    interval_ms: u64,
    next_ms: Millis,
    cancelled: bool,
}

impl Repeating {
    /// Arm the timer; the first firing is one interval after `now_ms`.
    /// Callers wanting an immediate shot perform it themselves on arm.
    pub fn arm(interval_ms: u64, now_ms: Millis) -> Self {
        Self {
            interval_ms,
            next_ms: now_ms + interval_ms,
            cancelled: false,
        }
    }

    /// Number of firings elapsed by `now_ms`. Zero once cancelled.
    pub fn due(&mut self, now_ms: Millis) -> u32 {
        if self.cancelled {
            return 0;
        }
        let mut fired = 0;
        while now_ms >= self.next_ms {
            self.next_ms += self.interval_ms;
            fired += 1;
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A deferred action that fires exactly once.
#[derive(Debug, Clone)]
pub struct OneShot {
    due_ms: Millis,
    fired: bool,
    cancelled: bool,
}

impl OneShot {
    pub fn after(delay_ms: u64, now_ms: Millis) -> Self {
        Self {
            due_ms: now_ms + delay_ms,
            fired: false,
            cancelled: false,
        }
    }

    /// True exactly once, at or after the due time.
    pub fn due(&mut self, now_ms: Millis) -> bool {
        if self.fired || self.cancelled || now_ms < self.due_ms {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_spent(&self) -> bool {
        self.fired || self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeating_fires_on_interval() {
        let mut r = Repeating::arm(100, 1000);
        assert_eq!(r.due(1050), 0);
        assert_eq!(r.due(1100), 1);
        assert_eq!(r.due(1150), 0);
        assert_eq!(r.due(1400), 3);
    }

    #[test]
    fn repeating_cancel_stops_firing() {
        let mut r = Repeating::arm(80, 0);
        assert_eq!(r.due(80), 1);
        r.cancel();
        assert!(r.is_cancelled());
        assert_eq!(r.due(10_000), 0);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut t = OneShot::after(50, 200);
        assert!(!t.due(249));
        assert!(t.due(250));
        assert!(!t.due(251));
        assert!(t.is_spent());
    }

    #[test]
    fn one_shot_cancel() {
        let mut t = OneShot::after(50, 0);
        t.cancel();
        assert!(!t.due(1000));
    }
}
