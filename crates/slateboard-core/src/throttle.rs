//! Rate limiter for hover hit-testing.

use std::time::{Duration, Instant};

/// Leading-edge throttle with a last-fired timestamp.
///
/// The first call fires immediately; further calls inside the window are
/// swallowed until the window elapses, at which point the next call fires
/// again. The trailing recomputation happens on the next event after the
/// window rather than on a timer; the interaction loop has no ambient
/// timers.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum interval between firings.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Returns true if the caller should run now, and records the firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }

    /// Forget the last firing so the next call fires immediately.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}
