use std::time::{Duration, Instant};

/// Target frame length, ≈30 FPS.
pub const FRAME_BUDGET: Duration = Duration::from_millis(33);

/// Time source for the frame loop, in milliseconds.
pub trait FrameClock {
    fn now_ms(&mut self) -> f64;

    /// Called once per presented frame.
    fn end_frame(&mut self) {}
}

/// Wall-clock time; sleeps away whatever is left of the frame budget.
pub struct MonotonicClock {
    origin: Instant,
    frame_start: Instant,
    budget: Duration,
}

impl MonotonicClock {
    pub fn new(budget: Duration) -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            frame_start: now,
            budget,
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new(FRAME_BUDGET)
    }
}

impl FrameClock for MonotonicClock {
    fn now_ms(&mut self) -> f64 {
        self.frame_start = Instant::now();
        self.frame_start.duration_since(self.origin).as_secs_f64() * 1000.0
    }

    fn end_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
    }
}

/// Advances by a fixed step on every reading and never sleeps.  Lets whole
/// scenes run headless and deterministic.
#[derive(Clone, Debug)]
pub struct SteppedClock {
    now: f64,
    step: f64,
    frames: u64,
}

impl SteppedClock {
    pub fn new(step: f64) -> Self {
        Self {
            now: 0.0,
            step,
            frames: 0,
        }
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameClock for SteppedClock {
    fn now_ms(&mut self) -> f64 {
        self.now += self.step;
        self.now
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
