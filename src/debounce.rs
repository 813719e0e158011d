//! Time-window debouncing for digital inputs.
//!
//! A new level is accepted once the raw reading has held still for the whole
//! window. Any bounce restarts the window.

use embassy_time::{Duration, Instant};

/// Observable state of a debounced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    StableLow,
    StableHigh,
    /// Raw reading differs from the debounced level and is waiting out the window
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window: Duration,
    reading: bool,
    debounced: bool,
    last_change: Instant,
}

impl Debouncer {
    /// Debouncer starting low with its window anchored at `Instant::MIN`.
    pub const fn new(window: Duration) -> Self {
        Self::with_level(window, false)
    }

    /// Debouncer whose raw and debounced level both start at `level`.
    pub const fn with_level(window: Duration, level: bool) -> Self {
        Self {
            window,
            reading: level,
            debounced: level,
            last_change: Instant::MIN,
        }
    }

    /// Feed one raw reading taken at `now`.
    ///
    /// Returns the new debounced level exactly once per accepted transition.
    pub fn update(&mut self, reading: bool, now: Instant) -> Option<bool> {
        if reading != self.reading {
            self.last_change = now;
        }
        self.reading = reading;

        let stable_for = now.saturating_duration_since(self.last_change);
        if stable_for >= self.window && reading != self.debounced {
            self.debounced = reading;
            return Some(reading);
        }

        None
    }

    pub const fn debounced(&self) -> bool {
        self.debounced
    }

    pub const fn reading(&self) -> bool {
        self.reading
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    pub const fn last_change(&self) -> Instant {
        self.last_change
    }

    pub fn state(&self) -> DebounceState {
        match (self.reading != self.debounced, self.debounced) {
            (true, _) => DebounceState::Pending,
            (false, true) => DebounceState::StableHigh,
            (false, false) => DebounceState::StableLow,
        }
    }
}
