/// Exponential Moving Average filter state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmaFilter {
    value: f32,
}

impl EmaFilter {
    /// Create new EMA filter resting at 0.0
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Create a filter that starts from a known value
    pub const fn with_value(value: f32) -> Self {
        Self { value }
    }

    /// Apply EMA filter: output = previous + (input - previous) * alpha
    ///
    /// The filter is not seeded from the first sample; it moves toward it from
    /// wherever it currently rests.
    pub fn apply(&mut self, input: f32, alpha: f32) -> f32 {
        debug_assert!(
            alpha > 0.0 && alpha <= 1.0,
            "EMA alpha must be in range (0.0, 1.0], got {}",
            alpha
        );

        self.value += (input - self.value) * alpha;
        self.value
    }

    /// Current smoothed value
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

impl Default for EmaFilter {
    fn default() -> Self {
        Self::new()
    }
}
