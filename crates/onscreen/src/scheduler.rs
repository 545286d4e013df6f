//! Tick scheduling helpers
//!
//! The monitor never subscribes to scroll or resize sources itself; the
//! embedding drives it. These are the pieces that wiring needs: the cause of
//! a tick, and a throttle that coalesces signal bursts into at most one tick
//! per interval.

use std::time::{Duration, Instant};

/// What triggered an evaluation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickCause {
    /// Scroll signal; cached geometry is reused
    Scroll,
    /// Viewport resize; geometry re-measured when the config says so
    Resize,
    /// Direct invocation; geometry always re-measured
    Manual,
}

/// Coalesces bursts of scroll/resize signals
///
/// `ready` answers whether a tick may run now, opening the gate at most once
/// per interval. A zero interval never throttles.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Create with a minimum interval between ticks
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Gate a tick at `now`
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forget the last tick; the next `ready` passes
    pub fn reset(&mut self) {
        self.last = None;
    }
}
