use std::time::Duration;

/// Check-and-skip rate limit for drag ticks.
///
/// Timestamps are monotonic offsets supplied by the caller. A tick that comes
/// sooner than `interval` after the last accepted one is refused outright;
/// nothing is delayed or queued.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    interval: Duration,
    last_tick: Option<Duration>,
}

impl FrameThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn try_tick(&mut self, now: Duration) -> bool {
        if self.should_skip(now) {
            return false;
        }
        self.last_tick = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    fn should_skip(&self, now: Duration) -> bool {
        match self.last_tick {
            Some(last) => now.saturating_sub(last) < self.interval,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_first_tick_always_passes() {
        let mut throttle = FrameThrottle::new(ms(16));
        assert!(throttle.try_tick(ms(0)));
    }

    #[test]
    fn test_fast_ticks_are_dropped() {
        let mut throttle = FrameThrottle::new(ms(16));
        assert!(throttle.try_tick(ms(100)));
        assert!(!throttle.try_tick(ms(108)));
        assert!(!throttle.try_tick(ms(115)));
        assert!(throttle.try_tick(ms(116)));
        // measured from the last accepted tick, not the last attempt
        assert!(!throttle.try_tick(ms(131)));
        assert!(throttle.try_tick(ms(140)));
    }

    #[test]
    fn test_clock_going_backwards_is_skipped() {
        let mut throttle = FrameThrottle::new(ms(16));
        assert!(throttle.try_tick(ms(50)));
        assert!(!throttle.try_tick(ms(10)));
    }

    #[test]
    fn test_reset() {
        let mut throttle = FrameThrottle::new(ms(16));
        assert!(throttle.try_tick(ms(1)));
        throttle.reset();
        assert!(throttle.try_tick(ms(2)));
    }
}
