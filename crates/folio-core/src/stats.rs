//! "Live coding stats" counter animation.
//!
//! The animation nudges four counters toward their ceilings once per step and
//! settles after a fixed number of steps whether or not the ceilings were reached.

use std::time::Duration;

use tracing::debug;

/// Commit count used when the activity fetch fails.
pub const FALLBACK_COMMITS: u32 = 47;

/// Time between counter steps.
pub const STEP_PERIOD: Duration = Duration::from_millis(50);

/// Total running time of the counter animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(3000);

pub const HOURS_CEILING_TENTHS: u32 = 85;
pub const LINES_CEILING: u32 = 2847;
pub const COFFEE_CEILING: u32 = 12;

const COMMITS_STEP: u32 = 1;
const HOURS_STEP_TENTHS: u32 = 2;
const LINES_STEP: u32 = 67;
const COFFEE_STEP: u32 = 1;

/// Lifecycle of a tick-driven animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running {
        started_at: Duration,
    },
    Settled,
}

impl AnimationPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// The four displayed counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodingStats {
    pub commits_this_month: u32,
    /// Hours coded today, in tenths of an hour.
    pub hours_today_tenths: u32,
    pub lines_written: u32,
    pub coffee_count: u32,
}

impl CodingStats {
    pub fn hours_today(&self) -> f64 {
        f64::from(self.hours_today_tenths) / 10.0
    }

    /// Move every counter one step toward its ceiling.
    fn step(&mut self, commit_ceiling: u32) {
        self.commits_this_month = bump(self.commits_this_month, COMMITS_STEP, commit_ceiling);
        self.hours_today_tenths =
            bump(self.hours_today_tenths, HOURS_STEP_TENTHS, HOURS_CEILING_TENTHS);
        self.lines_written = bump(self.lines_written, LINES_STEP, LINES_CEILING);
        self.coffee_count = bump(self.coffee_count, COFFEE_STEP, COFFEE_CEILING);
    }
}

// Never decreases, even if the ceiling is below the current value.
fn bump(value: u32, step: u32, ceiling: u32) -> u32 {
    value.max(value.saturating_add(step).min(ceiling))
}

/// Counter animation state machine.
#[derive(Debug, Clone, Default)]
pub struct StatsAnimation {
    phase: AnimationPhase,
    stats: CodingStats,
    steps_applied: u32,
    commit_target: u32,
}

impl StatsAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of steps before the animation settles.
    pub fn max_steps() -> u32 {
        (ANIMATION_DURATION.as_millis() / STEP_PERIOD.as_millis()) as u32
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn stats(&self) -> CodingStats {
        self.stats
    }

    pub fn commit_target(&self) -> u32 {
        self.commit_target
    }

    /// Start running at `now`. Has no effect unless idle.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.phase != AnimationPhase::Idle {
            return false;
        }
        debug!(now_ms = now.as_millis() as u64, "Stats animation started");
        self.phase = AnimationPhase::Running { started_at: now };
        true
    }

    /// Set the real commit total once it is known. Until then the commit ceiling is zero.
    pub fn set_commit_target(&mut self, total: u32) {
        self.commit_target = total;
    }

    /// Apply every step due at `now`.
    pub fn advance(&mut self, now: Duration) {
        let AnimationPhase::Running { started_at } = self.phase else {
            return;
        };

        let elapsed = now.saturating_sub(started_at);
        let due = ((elapsed.as_millis() / STEP_PERIOD.as_millis()) as u32).min(Self::max_steps());

        while self.steps_applied < due {
            self.stats.step(self.commit_target);
            self.steps_applied += 1;
        }

        if self.steps_applied >= Self::max_steps() {
            debug!(stats = ?self.stats, "Stats animation settled");
            self.phase = AnimationPhase::Settled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_until_started() {
        let mut animation = StatsAnimation::new();
        animation.advance(ms(10_000));
        assert_eq!(animation.phase(), AnimationPhase::Idle);
        assert_eq!(animation.stats(), CodingStats::default());
    }

    #[test]
    fn test_start_only_once() {
        let mut animation = StatsAnimation::new();
        assert!(animation.start(ms(100)));
        assert!(!animation.start(ms(200)));
        assert_eq!(animation.phase(), AnimationPhase::Running { started_at: ms(100) });
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let mut animation = StatsAnimation::new();
        animation.set_commit_target(FALLBACK_COMMITS);
        animation.start(ms(0));

        let mut previous = animation.stats();
        for t in (0..4000).step_by(7) {
            animation.advance(ms(t));
            let current = animation.stats();
            assert!(current.commits_this_month >= previous.commits_this_month);
            assert!(current.hours_today_tenths >= previous.hours_today_tenths);
            assert!(current.lines_written >= previous.lines_written);
            assert!(current.coffee_count >= previous.coffee_count);

            assert!(current.commits_this_month <= FALLBACK_COMMITS);
            assert!(current.hours_today() <= 8.5);
            assert!(current.lines_written <= 2847);
            assert!(current.coffee_count <= 12);
            previous = current;
        }
    }

    #[test]
    fn test_settles_at_duration_and_reaches_ceilings() {
        let mut animation = StatsAnimation::new();
        animation.set_commit_target(FALLBACK_COMMITS);
        animation.start(ms(500));

        animation.advance(ms(500 + 2999));
        assert!(animation.phase().is_running());

        animation.advance(ms(500 + 3000));
        assert!(animation.phase().is_settled());

        let stats = animation.stats();
        assert_eq!(stats.commits_this_month, FALLBACK_COMMITS);
        assert_eq!(stats.hours_today_tenths, HOURS_CEILING_TENTHS);
        assert_eq!(stats.lines_written, LINES_CEILING);
        assert_eq!(stats.coffee_count, COFFEE_CEILING);

        // Further ticks change nothing.
        animation.advance(ms(60_000));
        assert_eq!(animation.stats(), stats);
    }

    #[test]
    fn test_commits_wait_for_target() {
        let mut animation = StatsAnimation::new();
        animation.start(ms(0));
        animation.advance(ms(1000));
        assert_eq!(animation.stats().commits_this_month, 0);
        assert!(animation.stats().lines_written > 0);

        animation.set_commit_target(5);
        animation.advance(ms(1500));
        assert_eq!(animation.stats().commits_this_month, 5);
    }

    #[test]
    fn test_large_total_not_reached() {
        let mut animation = StatsAnimation::new();
        animation.set_commit_target(500);
        animation.start(ms(0));
        animation.advance(ms(10_000));

        assert!(animation.phase().is_settled());
        assert_eq!(animation.stats().commits_this_month, StatsAnimation::max_steps());
    }

    #[test]
    fn test_late_tick_equals_many_small_ticks() {
        let mut coarse = StatsAnimation::new();
        let mut fine = StatsAnimation::new();
        for animation in [&mut coarse, &mut fine] {
            animation.set_commit_target(30);
            animation.start(ms(0));
        }

        coarse.advance(ms(1234));
        for t in 0..=1234 {
            fine.advance(ms(t));
        }
        assert_eq!(coarse.stats(), fine.stats());
    }
}
