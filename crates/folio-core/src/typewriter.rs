//! Typewriter reveal of the fun facts.

use std::time::Duration;

use crate::content::{FunFact, FUN_FACTS};
use crate::stats::AnimationPhase;

/// One fun fact being typed out.
#[derive(Debug, Clone, Copy)]
pub struct FactReveal {
    fact: FunFact,
    phase: AnimationPhase,
    revealed_chars: usize,
}

impl FactReveal {
    pub fn new(fact: FunFact) -> Self {
        Self {
            fact,
            phase: AnimationPhase::Idle,
            revealed_chars: 0,
        }
    }

    pub fn target(&self) -> &'static str {
        self.fact.text
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// The currently visible prefix of the target.
    pub fn revealed(&self) -> &'static str {
        let text = self.fact.text;
        match text.char_indices().nth(self.revealed_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_chars >= self.fact.text.chars().count()
    }

    pub fn start(&mut self, now: Duration) {
        if self.phase == AnimationPhase::Idle {
            self.phase = AnimationPhase::Running { started_at: now };
        }
    }

    /// Reveal every character due at `now`.
    pub fn advance(&mut self, now: Duration) {
        let AnimationPhase::Running { started_at } = self.phase else {
            return;
        };

        let total = self.fact.text.chars().count();
        let typing_for = now
            .saturating_sub(started_at)
            .saturating_sub(self.fact.start_delay);
        let due = (typing_for.as_millis() / self.fact.char_interval.as_millis().max(1)) as usize;

        self.revealed_chars = self.revealed_chars.max(due.min(total));
        if self.revealed_chars >= total {
            self.phase = AnimationPhase::Settled;
        }
    }
}

/// All fun-fact reveals, started together and each running on its own schedule.
#[derive(Debug, Clone)]
pub struct FunFactReel {
    reveals: Vec<FactReveal>,
}

impl Default for FunFactReel {
    fn default() -> Self {
        Self::new(FUN_FACTS)
    }
}

impl FunFactReel {
    pub fn new(facts: &[FunFact]) -> Self {
        Self {
            reveals: facts.iter().copied().map(FactReveal::new).collect(),
        }
    }

    pub fn reveals(&self) -> &[FactReveal] {
        &self.reveals
    }

    pub fn start(&mut self, now: Duration) {
        for reveal in &mut self.reveals {
            reveal.start(now);
        }
    }

    pub fn advance(&mut self, now: Duration) {
        for reveal in &mut self.reveals {
            reveal.advance(now);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.reveals.iter().all(FactReveal::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn fact(text: &'static str, delay: u64, interval: u64) -> FunFact {
        FunFact {
            text,
            start_delay: ms(delay),
            char_interval: ms(interval),
        }
    }

    #[test]
    fn test_nothing_before_start() {
        let mut reveal = FactReveal::new(fact("hello", 0, 10));
        reveal.advance(ms(1000));
        assert_eq!(reveal.revealed(), "");
        assert_eq!(reveal.phase(), AnimationPhase::Idle);
    }

    #[test]
    fn test_reveals_one_char_per_interval_after_delay() {
        let mut reveal = FactReveal::new(fact("hello", 100, 10));
        reveal.start(ms(0));

        reveal.advance(ms(100));
        assert_eq!(reveal.revealed(), "");
        reveal.advance(ms(110));
        assert_eq!(reveal.revealed(), "h");
        reveal.advance(ms(135));
        assert_eq!(reveal.revealed(), "hel");
        reveal.advance(ms(150));
        assert_eq!(reveal.revealed(), "hello");
        assert!(reveal.phase().is_settled());
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut reveal = FactReveal::new(fact("héllo☕", 0, 10));
        reveal.start(ms(0));
        reveal.advance(ms(20));
        assert_eq!(reveal.revealed(), "hé");
        reveal.advance(ms(60));
        assert_eq!(reveal.revealed(), "héllo☕");
    }

    #[test]
    fn test_always_prefix_and_eventually_complete() {
        let mut reel = FunFactReel::default();
        reel.start(ms(250));

        let mut lengths = vec![0; reel.reveals().len()];
        for t in (0..20_000).step_by(13) {
            reel.advance(ms(t));
            for (reveal, previous) in reel.reveals().iter().zip(lengths.iter_mut()) {
                assert!(reveal.target().starts_with(reveal.revealed()));
                assert!(reveal.revealed().len() >= *previous);
                *previous = reveal.revealed().len();
            }
        }

        assert!(reel.is_complete());
        for reveal in reel.reveals() {
            assert_eq!(reveal.revealed(), reveal.target());
        }
    }

    #[test]
    fn test_clock_going_backwards_does_not_shrink() {
        let mut reveal = FactReveal::new(fact("abcdef", 0, 10));
        reveal.start(ms(0));
        reveal.advance(ms(40));
        reveal.advance(ms(20));
        assert_eq!(reveal.revealed(), "abcd");
    }
}
