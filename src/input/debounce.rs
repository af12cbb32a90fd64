//! Software debounce for mechanical switches

use embassy_time::{Duration, Instant};

/// Debounced level transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Debounce state for one polled input
///
/// The stable level only follows the raw level once the raw level has stayed
/// unchanged for the whole settle interval. Poll it on every loop iteration,
/// whether or not the level changed.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    /// Last raw reading (true = pressed)
    raw: bool,
    /// Last committed level
    stable: bool,
    /// When the raw reading last changed
    changed_at: Instant,
    settle: Duration,
}

impl Debouncer {
    /// Create a debouncer that starts released
    pub const fn new(settle: Duration) -> Self {
        Self {
            raw: false,
            stable: false,
            changed_at: Instant::from_ticks(0),
            settle,
        }
    }

    /// Feed a raw reading. Returns an edge when a change is committed.
    pub fn update(&mut self, level: bool, now: Instant) -> Option<Edge> {
        if level != self.raw {
            self.raw = level;
            self.changed_at = now;
            return None;
        }

        if level == self.stable {
            return None;
        }

        if now.saturating_duration_since(self.changed_at) < self.settle {
            return None;
        }

        self.stable = level;
        Some(if level { Edge::Pressed } else { Edge::Released })
    }

    /// Committed level (true = pressed)
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }
}
