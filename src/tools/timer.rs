use std::time::{Duration, Instant};

use log::debug;

/// Wall clock timer with labelled laps, used for the end of run report.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last: Instant,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Close the current lap under `label`, logging and returning its length.
    pub fn mark(&mut self, label: &'static str) -> Duration {
        let now = Instant::now();
        let lap = now - self.last;
        debug!("{:<8} {:>10.4} s", label, lap.as_secs_f64());
        self.last = now;
        lap
    }

    /// Time since the timer was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::Timer;

    #[test]
    fn laps_fit_in_elapsed() {
        let mut timer = Timer::new();
        let laps = timer.mark("read") + timer.mark("encode");
        assert!(laps <= timer.elapsed());
    }
}
