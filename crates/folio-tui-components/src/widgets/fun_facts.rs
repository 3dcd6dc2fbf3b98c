//! Typewriter fun facts list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::wrap_words;

const CURSOR: &str = "▌";
const BULLET: &str = " > ";
const CONTINUATION: &str = "   ";

/// A fact and how much of it is visible.
#[derive(Debug, Clone, Copy)]
pub struct FunFactLine<'a> {
    pub revealed: &'a str,
    /// Full text once revealed; sizes the panel up front.
    pub target: &'a str,
    /// Still being typed.
    pub typing: bool,
}

/// Panel of partially revealed fun facts.
#[derive(Debug, Clone)]
pub struct FunFactsWidget<'a> {
    facts: &'a [FunFactLine<'a>],
    theme: Theme,
}

impl<'a> FunFactsWidget<'a> {
    pub fn new(facts: &'a [FunFactLine<'a>]) -> Self {
        Self {
            facts,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // Borders, bullet and the typing cursor.
    fn text_width(width: u16) -> usize {
        (width.saturating_sub(2) as usize)
            .saturating_sub(BULLET.len() + 1)
            .max(1)
    }

    /// Rows needed to show every fact in full at `width`, including borders.
    pub fn height(&self, width: u16) -> u16 {
        let text_width = Self::text_width(width);
        let rows: usize = self
            .facts
            .iter()
            .map(|fact| wrap_words(fact.target, text_width).len())
            .sum();
        rows as u16 + 2
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let text_width = Self::text_width(width);
        let mut lines = Vec::new();

        for fact in self
            .facts
            .iter()
            .filter(|fact| fact.typing || !fact.revealed.is_empty())
        {
            let rows = wrap_words(fact.revealed, text_width);
            let last = rows.len().saturating_sub(1);
            for (i, row) in rows.into_iter().enumerate() {
                let prefix = if i == 0 { BULLET } else { CONTINUATION };
                let mut spans = vec![
                    Span::styled(prefix, self.theme.muted_style()),
                    Span::styled(row, self.theme.text_style()),
                ];
                if fact.typing && i == last {
                    spans.push(Span::styled(CURSOR, self.theme.live_style()));
                }
                lines.push(Line::from(spans));
            }
        }

        lines
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines(area.width)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(" Fun facts "),
        );

        frame.render_widget(paragraph, area);
    }
}
