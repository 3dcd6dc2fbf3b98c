//! Single-line text input.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// An input line with a cursor and a placeholder.
#[derive(Debug, Clone)]
pub struct InputLine<'a> {
    /// Current value.
    value: &'a str,
    /// Cursor position in characters.
    cursor: usize,
    /// Whether the field is focused.
    focused: bool,
    /// Placeholder text.
    placeholder: Option<&'a str>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> InputLine<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            cursor: value.chars().count(),
            focused: false,
            placeholder: None,
            theme: Theme::default(),
        }
    }

    /// Set the cursor position.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set whether the field is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Text to display, with a cursor mark when focused.
    pub fn render_text(&self) -> String {
        if self.value.is_empty() && !self.focused {
            return self.placeholder.unwrap_or_default().to_string();
        }

        if self.focused {
            let char_count = self.value.chars().count();
            let cursor_pos = self.cursor.min(char_count);
            let before: String = self.value.chars().take(cursor_pos).collect();
            let after: String = self.value.chars().skip(cursor_pos).collect();
            format!("{}|{}", before, after)
        } else {
            self.value.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.value.is_empty() && !self.focused {
            self.theme.muted_style()
        } else {
            self.theme.text_style()
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };
        let title = if self.value.trim().is_empty() {
            " Ask "
        } else {
            " Ask [Enter] send "
        };

        let paragraph = Paragraph::new(self.render_text())
            .style(self.text_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            );

        frame.render_widget(paragraph, area);
    }
}
