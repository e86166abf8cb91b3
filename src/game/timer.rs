//! One-shot deferred callback driven by the frame clock.

/// A cancellable one-shot timer. Arming a pending timer replaces it, so at
/// most one firing is ever outstanding.
#[derive(Debug, Clone, Default)]
pub struct DeferredTimer {
    remaining: Option<f32>,
    armed_count: u32,
}

impl DeferredTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a firing `delay` seconds from now, cancelling any pending one.
    /// Returns true when a pending firing was replaced.
    pub fn arm(&mut self, delay: f32) -> bool {
        let replaced = self.remaining.is_some();
        self.remaining = Some(delay.max(0.0));
        self.armed_count += 1;
        replaced
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Times `arm` has been called.
    pub fn armed_count(&self) -> u32 {
        self.armed_count
    }

    /// Advance by `dt` seconds. Returns true exactly once when the timer fires.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(remaining) if remaining - dt <= 0.0 => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut timer = DeferredTimer::new();
        timer.arm(1.0);
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.5));
        assert!(!timer.tick(10.0));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let mut timer = DeferredTimer::new();
        assert!(!timer.arm(1.0));
        timer.tick(0.9);
        assert!(timer.arm(1.0));
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.5));
        assert!(!timer.tick(5.0));
        assert_eq!(timer.armed_count(), 2);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timer = DeferredTimer::new();
        timer.arm(0.1);
        timer.cancel();
        assert!(!timer.tick(1.0));
    }

    #[test]
    fn test_zero_delay_fires_on_next_tick() {
        let mut timer = DeferredTimer::new();
        timer.arm(0.0);
        assert!(timer.tick(0.0));
    }
}
