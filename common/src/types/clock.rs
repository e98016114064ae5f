use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::Instant;

use crate::traits::Clock;

/// Wall-clock time in seconds since the UNIX epoch.
///
/// Wall time may jump backwards (NTP adjustments, manual changes). Consumers that derive
/// rates from consecutive timestamps must tolerate non-positive elapsed times.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(now) => now.as_secs() as f64 + now.subsec_micros() as f64 * 1e-6,
            Err(_) => 0.0,
        }
    }
}

/// Monotonic time in seconds elapsed since the clock was created.
///
/// Backed by `tokio::time::Instant`, so it follows the paused/advanced clock of a tokio
/// test runtime.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_system_clock_now() {
        let clock = SystemClock::new();
        assert!(clock.now_secs() > 0.0);
    }

    #[test]
    fn test_system_clock_now_is_recent() {
        let clock = SystemClock::new();
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
        let timestamp = now.as_secs() as f64 + now.subsec_micros() as f64 * 1e-6;
        assert!((clock.now_secs() - timestamp).abs() < 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_monotonic_clock_follows_runtime_time() {
        let clock = MonotonicClock::new();
        assert_eq!(clock.now_secs(), 0.0);

        tokio::time::advance(Duration::from_millis(2500)).await;
        assert!((clock.now_secs() - 2.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let mut previous = clock.now_secs();
        for _ in 0..100 {
            let now = clock.now_secs();
            assert!(now >= previous);
            previous = now;
        }
    }
}
