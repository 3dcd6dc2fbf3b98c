//! Footer widget for TUI applications.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::theme::Theme;

/// Footer widget displaying a status and key help.
#[derive(Debug, Clone)]
pub struct Footer<'a> {
    /// Status message.
    status: &'a str,
    /// Key help.
    help: &'a str,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer.
    pub fn new(status: &'a str, help: &'a str) -> Self {
        Self {
            status,
            help,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the footer.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let footer = Line::from(vec![
            Span::styled(format!(" {}", self.status), self.theme.assistant_style()),
            Span::raw(" | "),
            Span::styled(self.help, self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }
}
