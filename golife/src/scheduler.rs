// scheduler.rs - Minimum-interval gate for the animation loop

use std::time::{Duration, Instant};

/// Decides, once per frame, whether the running simulation may advance a
/// generation. Frames arrive much faster than the configured interval;
/// when the gate stays closed the frame only re-renders.
pub struct StepScheduler {
    last_step: Option<Instant>,
}

impl StepScheduler {
    pub fn new() -> Self {
        Self { last_step: None }
    }

    /// True when at least `min_interval` has elapsed since the last
    /// permitted step, which this call then records. The first poll after
    /// construction or [`StepScheduler::reset`] always fires.
    pub fn should_step(&mut self, now: Instant, min_interval: Duration) -> bool {
        let due = match self.last_step {
            Some(last) => now.duration_since(last) >= min_interval,
            None => true,
        };
        if due {
            self.last_step = Some(now);
        }
        due
    }

    /// Forgets the last step time so the next poll fires immediately.
    pub fn reset(&mut self) {
        self.last_step = None;
    }
}
