//! Whole-session state for one portfolio view.

use std::time::Duration;

use tracing::info;

use crate::content::quick_prompt;
use crate::conversation::{Conversation, ConversationEffect};
use crate::error::CoreError;
use crate::ids::MessageId;
use crate::stats::StatsAnimation;
use crate::trigger::{Throttle, VisibilityTrigger};
use crate::typewriter::FunFactReel;

/// Owned state of a portfolio session, advanced by an external clock.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    conversation: Conversation,
    stats: StatsAnimation,
    fun_facts: FunFactReel,
    stats_trigger: VisibilityTrigger,
    viewport_throttle: Throttle,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn stats(&self) -> &StatsAnimation {
        &self.stats
    }

    pub fn fun_facts(&self) -> &FunFactReel {
        &self.fun_facts
    }

    /// Whether the live panel animations have been started.
    pub fn animations_started(&self) -> bool {
        self.stats_trigger.has_fired()
    }

    /// Send visitor text. Blank input is ignored, other input is trimmed.
    pub fn send(&mut self, text: &str, now: Duration) -> Option<MessageId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.conversation.send(text, now))
    }

    /// Send the quick prompt at `index` as if it had been typed.
    pub fn send_quick_prompt(&mut self, index: usize, now: Duration) -> Result<MessageId, CoreError> {
        let prompt = quick_prompt(index)?;
        Ok(self.conversation.send(prompt.text, now))
    }

    /// Report how much of the stats panel is visible.
    ///
    /// Returns true when this observation started the animations; the caller should
    /// then request the commit total.
    pub fn observe_stats_visibility(&mut self, visible_fraction: f64, now: Duration) -> bool {
        if !self.stats_trigger.observe(visible_fraction) {
            return false;
        }
        info!(visible_fraction, "Stats panel visible, starting animations");
        self.stats.start(now);
        self.fun_facts.start(now);
        true
    }

    /// Record the resolved commit total.
    pub fn set_commit_target(&mut self, total: u32) {
        info!(total, "Commit total resolved");
        self.stats.set_commit_target(total);
    }

    /// Whether a scroll or resize event at `now` should recompute layout-derived values.
    pub fn viewport_changed(&mut self, now: Duration) -> bool {
        self.viewport_throttle.ready(now)
    }

    /// Advance every timer to `now` and return the effects that came due.
    pub fn advance(&mut self, now: Duration) -> Vec<ConversationEffect> {
        self.stats.advance(now);
        self.fun_facts.advance(now);
        self.conversation.advance(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use crate::stats::{AnimationPhase, FALLBACK_COMMITS};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut portfolio = Portfolio::new();
        assert!(portfolio.send("   ", ms(0)).is_none());
        assert!(portfolio.send("", ms(0)).is_none());
        assert_eq!(portfolio.conversation().transcript().messages().len(), 1);
    }

    #[test]
    fn test_input_trimmed() {
        let mut portfolio = Portfolio::new();
        portfolio.send("  hello  ", ms(0));
        let last = portfolio.conversation().transcript().last().unwrap();
        assert_eq!(last.content(), "hello");
    }

    #[test]
    fn test_quick_prompt_scrolls_to_its_section() {
        let mut portfolio = Portfolio::new();
        portfolio.send_quick_prompt(3, ms(0)).unwrap();
        let effects = portfolio.advance(ms(1500));
        assert_eq!(effects, vec![ConversationEffect::ScrollTo(Section::Contact)]);
        assert!(portfolio.send_quick_prompt(4, ms(0)).is_err());
    }

    #[test]
    fn test_animations_start_once() {
        let mut portfolio = Portfolio::new();
        assert!(!portfolio.observe_stats_visibility(0.1, ms(100)));
        assert!(portfolio.observe_stats_visibility(0.4, ms(200)));
        assert!(!portfolio.observe_stats_visibility(0.0, ms(250)));
        assert!(!portfolio.observe_stats_visibility(0.8, ms(300)));

        assert_eq!(
            portfolio.stats().phase(),
            AnimationPhase::Running { started_at: ms(200) }
        );
        for reveal in portfolio.fun_facts().reveals() {
            assert_eq!(reveal.phase(), AnimationPhase::Running { started_at: ms(200) });
        }
    }

    #[test]
    fn test_fallback_total_and_bounded_run() {
        let mut portfolio = Portfolio::new();
        portfolio.observe_stats_visibility(1.0, ms(0));
        portfolio.advance(ms(400));
        portfolio.set_commit_target(FALLBACK_COMMITS);

        portfolio.advance(ms(3000));
        assert!(portfolio.stats().phase().is_settled());
        assert_eq!(portfolio.stats().stats().commits_this_month, FALLBACK_COMMITS);
    }

    #[test]
    fn test_viewport_throttled() {
        let mut portfolio = Portfolio::new();
        assert!(portfolio.viewport_changed(ms(0)));
        assert!(!portfolio.viewport_changed(ms(5)));
        assert!(portfolio.viewport_changed(ms(40)));
    }
}
