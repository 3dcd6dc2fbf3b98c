//! Header with the owner's name and section tabs.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::theme::Theme;

/// Header widget with title and section tabs.
#[derive(Debug, Clone)]
pub struct Header<'a> {
    /// Page title.
    title: &'a str,
    /// Tab labels.
    tabs: Vec<&'a str>,
    /// Selected tab index.
    selected_tab: usize,
    /// Theme for styling.
    theme: Theme,
}

impl<'a> Header<'a> {
    /// Create a new header with a title.
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            tabs: Vec::new(),
            selected_tab: 0,
            theme: Theme::default(),
        }
    }

    /// Set the tabs.
    pub fn tabs(mut self, tabs: Vec<&'a str>, selected: usize) -> Self {
        self.tabs = tabs;
        self.selected_tab = selected;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render the header.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let tab_titles: Vec<Line> = self
            .tabs
            .iter()
            .map(|name| Line::from(format!(" {} ", name)))
            .collect();

        let tabs_widget = Tabs::new(tab_titles)
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", self.title),
                        self.theme.heading_style(),
                    ))
                    .borders(Borders::ALL)
                    .border_style(self.theme.unfocused_border()),
            )
            .style(self.theme.text_style())
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .select(self.selected_tab)
            .divider("|");

        frame.render_widget(tabs_widget, area);
    }
}
