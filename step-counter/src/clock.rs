use std::thread;
use std::time::{Duration, Instant};

/// Monotonic time plus the ability to block, factored out of the loop so tests
/// can simulate elapsed time without real delays.
pub trait Clock
{
    /// Milliseconds elapsed on a monotonic clock; never decreases.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64);
}

/// The process clock, anchored at creation time.
pub struct SystemClock
{
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}
