//! One-shot and rate-limited triggers.

use std::time::Duration;

/// Fraction of the stats panel that must be visible to start the animations.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Window for scroll/resize recomputation.
pub const VIEWPORT_THROTTLE: Duration = Duration::from_millis(16);

/// One-shot guard: fires at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    /// Returns true the first time it is called, false afterwards.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Fires once, the first time an observed visible fraction reaches its threshold.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityTrigger {
    threshold: f64,
    latch: Latch,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            latch: Latch::default(),
        }
    }

    /// Report the currently visible fraction (0.0..=1.0).
    ///
    /// Returns true exactly once per trigger.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if visible_fraction < self.threshold {
            return false;
        }
        self.latch.fire()
    }

    pub fn has_fired(&self) -> bool {
        self.latch.has_fired()
    }
}

/// Leading-edge throttle.
///
/// The first call in a window passes, later calls inside the window are dropped
/// (not deferred).
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    window: Duration,
    last_fired: Option<Duration>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(VIEWPORT_THROTTLE)
    }
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Whether an event at `now` may run.
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_sub(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = Latch::default();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }

    #[test]
    fn test_visibility_below_threshold() {
        let mut trigger = VisibilityTrigger::default();
        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(0.29));
        assert!(!trigger.has_fired());
        assert!(trigger.observe(0.3));
    }

    #[test]
    fn test_visibility_crossed_twice_fires_once() {
        let mut trigger = VisibilityTrigger::default();
        assert!(trigger.observe(0.5));
        assert!(!trigger.observe(0.1));
        assert!(!trigger.observe(0.9));
        assert!(!trigger.observe(1.0));
    }

    #[test]
    fn test_throttle_drops_trailing_events() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.ready(Duration::from_millis(0)));
        assert!(!throttle.ready(Duration::from_millis(10)));
        assert!(!throttle.ready(Duration::from_millis(99)));
        assert!(throttle.ready(Duration::from_millis(100)));
        assert!(!throttle.ready(Duration::from_millis(150)));
        assert!(throttle.ready(Duration::from_millis(250)));
    }
}
