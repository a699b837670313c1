//! Conversion between the host's normalized values and controller integers.

pub const DEFAULT_UPPER_BOUND: u32 = 1024;

/// Resolution of controller-side values. Raw values span `0..upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    upper_bound: u32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(DEFAULT_UPPER_BOUND)
    }
}

impl ValueRange {
    /// Bounds below 2 are raised to 2 so the range always has two ends.
    pub fn new(upper_bound: u32) -> Self {
        Self {
            upper_bound: upper_bound.max(2),
        }
    }

    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    fn max_raw(&self) -> f64 {
        f64::from(self.upper_bound - 1)
    }

    /// Scale a host value in 0.0..=1.0 to the controller range, clamping
    /// anything outside it. NaN maps to 0.
    pub fn to_raw(&self, normalized: f64) -> i32 {
        let max = self.max_raw();
        let raw = (normalized * max).round().clamp(0.0, max);
        raw as i32
    }
}
