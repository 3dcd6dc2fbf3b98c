//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the portfolio screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary accent color (active tab, focused borders)
    pub accent: Color,
    /// Headings and emphasised text
    pub heading: Color,
    /// Body text
    pub text: Color,
    /// Muted color (timestamps, periods, hints)
    pub muted: Color,
    /// Tags and chips
    pub tag: Color,
    /// User message color
    pub user: Color,
    /// Assistant message color
    pub assistant: Color,
    /// Live values in the stats panel
    pub live: Color,
    /// Reading progress bar
    pub progress: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            heading: Color::White,
            text: Color::Gray,
            muted: Color::DarkGray,
            tag: Color::LightBlue,
            user: Color::Cyan,
            assistant: Color::Green,
            live: Color::Yellow,
            progress: Color::White,
        }
    }
}

impl Theme {
    /// Style for focused/active borders.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for unfocused borders.
    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for user messages.
    pub fn user_style(&self) -> Style {
        Style::default().fg(self.user)
    }

    /// Style for assistant messages.
    pub fn assistant_style(&self) -> Style {
        Style::default().fg(self.assistant)
    }

    pub fn live_style(&self) -> Style {
        Style::default().fg(self.live).add_modifier(Modifier::BOLD)
    }

    pub fn progress_style(&self) -> Style {
        Style::default().fg(self.progress)
    }
}
