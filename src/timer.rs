//! Countable durations, in milliseconds.

/// Fires once each time the accumulated time strictly exceeds `target`.
///
/// On firing the accumulator drops back to zero rather than carrying the
/// excess, so a long-running timer drifts slightly late.
#[derive(Clone, Debug, PartialEq)]
pub struct Timer {
    target: f64,
    elapsed: f64,
    enabled: bool,
}

impl Timer {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            elapsed: 0.0,
            enabled: true,
        }
    }

    /// Accumulates `delta_time`; returns true on the tick that passes the target.
    pub fn tick(&mut self, delta_time: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.elapsed += delta_time;
        if self.elapsed > self.target {
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    /// Rebinds the target and zeroes the accumulator.
    pub fn reset(&mut self, target: f64) {
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Zeroes the accumulator, keeping the current target.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Suspends accumulation; the target and elapsed time are kept.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
