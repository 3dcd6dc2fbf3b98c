//! "Live coding stats" panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// One labelled value.
#[derive(Debug, Clone)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: String,
}

impl StatEntry {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Panel listing the live stats.
#[derive(Debug, Clone)]
pub struct StatsPanel {
    entries: Vec<StatEntry>,
    live: bool,
    theme: Theme,
}

impl StatsPanel {
    pub fn new(entries: Vec<StatEntry>) -> Self {
        Self {
            entries,
            live: false,
            theme: Theme::default(),
        }
    }

    /// Mark the values as still animating.
    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows needed to show every entry, including borders.
    pub fn natural_height(entry_count: usize) -> u16 {
        entry_count as u16 + 2
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let label_width = self
            .entries
            .iter()
            .map(|e| e.label.len())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}  ", entry.label, width = label_width),
                        self.theme.muted_style(),
                    ),
                    Span::styled(entry.value.clone(), self.theme.live_style()),
                ])
            })
            .collect();

        let title = if self.live {
            " Live coding stats ● "
        } else {
            " Live coding stats "
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}
