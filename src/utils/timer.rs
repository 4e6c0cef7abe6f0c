//! Elapsed-time measurement handed to the optimizer
use std::time::{Duration, Instant};

/// Source of scoped elapsed-time measurements
pub trait Timer: Send + Sync {
    fn start(&self) -> Box<dyn RunningTimer>;
}

/// A started measurement
pub trait RunningTimer {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock timer backed by `Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimer;

struct InstantTimer(Instant);

impl RunningTimer for InstantTimer {
    fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

impl Timer for SystemTimer {
    fn start(&self) -> Box<dyn RunningTimer> {
        Box::new(InstantTimer(Instant::now()))
    }
}

/// Always reports the same duration, for reproducible run records
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTimer(pub Duration);

impl RunningTimer for FixedTimer {
    fn elapsed(&self) -> Duration {
        self.0
    }
}

impl Timer for FixedTimer {
    fn start(&self) -> Box<dyn RunningTimer> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_timer() {
        let timer = FixedTimer(Duration::from_millis(250));
        let running = timer.start();
        assert_eq!(running.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn test_system_timer_is_monotonic() {
        let running = SystemTimer.start();
        let first = running.elapsed();
        let second = running.elapsed();
        assert!(second >= first);
    }
}
