//! Chat widget for the assistant transcript.

use chrono::{DateTime, Local, Utc};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::wrap_text_indented;

/// Who wrote a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message to display.
#[derive(Debug, Clone)]
pub struct ChatLine<'a> {
    pub role: ChatRole,
    pub content: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// Transcript view; follows the newest message unless scrolled back.
#[derive(Debug, Clone)]
pub struct ChatWidget<'a> {
    /// Messages to display.
    messages: &'a [ChatLine<'a>],
    /// Whether an answer is on its way.
    typing: bool,
    /// Whether the widget is focused.
    focused: bool,
    /// First visible line; `usize::MAX` pins the view to the bottom.
    scroll: usize,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> ChatWidget<'a> {
    /// Create a new chat widget.
    pub fn new(messages: &'a [ChatLine<'a>]) -> Self {
        Self {
            messages,
            typing: false,
            focused: false,
            scroll: usize::MAX,
            theme: Theme::default(),
        }
    }

    /// Show the "typing" indicator.
    pub fn typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }

    /// Set whether the widget is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set scroll offset (usize::MAX = auto-scroll to bottom).
    pub fn scroll(mut self, offset: usize) -> Self {
        self.scroll = offset;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Largest useful scroll offset for `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        let visible_height = area.height.saturating_sub(2) as usize;
        self.lines(area.width.saturating_sub(2) as usize)
            .len()
            .saturating_sub(visible_height)
    }

    fn lines(&self, text_width: usize) -> Vec<Line<'static>> {
        let mut all_lines: Vec<Line> = Vec::new();

        for msg in self.messages {
            let (prefix, style) = match msg.role {
                ChatRole::User => (
                    "You ",
                    self.theme.user_style().add_modifier(Modifier::BOLD),
                ),
                ChatRole::Assistant => (
                    "Assistant ",
                    self.theme.assistant_style().add_modifier(Modifier::BOLD),
                ),
            };

            all_lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    msg.timestamp
                        .with_timezone(&Local)
                        .format("%H:%M:%S")
                        .to_string(),
                    self.theme.muted_style(),
                ),
            ]));

            for wrapped_line in wrap_text_indented(msg.content, text_width, "  ") {
                all_lines.push(Line::from(Span::styled(
                    wrapped_line,
                    self.theme.text_style(),
                )));
            }

            all_lines.push(Line::from(""));
        }

        if self.typing {
            all_lines.push(Line::from(vec![
                Span::styled(
                    "Assistant ",
                    self.theme.assistant_style().add_modifier(Modifier::BOLD),
                ),
                Span::styled("is typing...", self.theme.muted_style()),
            ]));
        }

        all_lines
    }

    /// Render the widget.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };

        let visible_height = area.height.saturating_sub(2) as usize;
        let all_lines = self.lines(area.width.saturating_sub(2) as usize);
        let total_lines = all_lines.len();

        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = if self.scroll == usize::MAX {
            max_scroll
        } else {
            self.scroll.min(max_scroll)
        };

        let lines: Vec<Line> = all_lines
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height)
            .collect();

        let title = if total_lines > visible_height {
            let first_line = scroll_offset + 1;
            let last_line = (scroll_offset + visible_height).min(total_lines);
            format!(" Chat [{}-{}/{}] ", first_line, last_line, total_lines)
        } else {
            format!(" Chat ({}) ", self.messages.len())
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}
