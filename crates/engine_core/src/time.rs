//! Frame timing and the throttled simulation tick.

use std::time::{Duration, Instant};

/// Millisecond timestamp, the unit every lifecycle check works in.
pub type Millis = u64;

/// Manages frame timing for a host-driven render loop.
#[derive(Debug)]
pub struct Time {
    /// Time when the session started.
    start: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Milliseconds elapsed since the session started.
    pub fn now_ms(&self) -> Millis {
        self.last_frame.duration_since(self.start).as_millis() as Millis
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Throttles the simulation to a fixed cadence independent of the host's
/// callback rate.
///
/// Each callback asks `try_tick`; the tick body runs only when at least the
/// interval has passed since the last *applied* tick, otherwise the callback
/// is expected to skip the body and keep rescheduling itself.
#[derive(Debug)]
pub struct TickGate {
    interval_ms: u64,
    last_tick_ms: Option<Millis>,
}

impl TickGate {
    /// Gate at ~60 ticks per second.
    pub fn at_60hz() -> Self {
        Self::new(16)
    }

    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_tick_ms: None,
        }
    }

    /// Returns true (and records the tick) when the interval has elapsed.
    pub fn try_tick(&mut self, now_ms: Millis) -> bool {
        match self.last_tick_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => false,
            _ => {
                self.last_tick_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}
