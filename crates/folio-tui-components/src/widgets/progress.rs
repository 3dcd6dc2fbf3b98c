//! One-row reading progress bar.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

const FILLED: &str = "━";
const TRACK: &str = "─";

/// Horizontal bar filled to a given number of columns.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    filled: u16,
    theme: Theme,
}

impl ProgressBar {
    pub fn new(filled: u16) -> Self {
        Self {
            filled,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let filled = self.filled.min(area.width) as usize;
        let rest = (area.width as usize).saturating_sub(filled);

        let line = Line::from(vec![
            Span::styled(FILLED.repeat(filled), self.theme.progress_style()),
            Span::styled(TRACK.repeat(rest), self.theme.muted_style()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
