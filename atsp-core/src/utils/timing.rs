#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use std::time::{Duration, Instant};

/// Implements a simple wall-clock performance timer.
#[derive(Clone, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time since the timer was started.
    pub fn elapsed(&self) -> Duration {
        Instant::now() - self.start
    }

    /// Runs action and returns its result together with its duration.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Timer::start();
        let result = action();

        (result, timer.elapsed())
    }
}
