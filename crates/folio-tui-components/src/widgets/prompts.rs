//! Quick prompt shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;
use crate::utils::{display_width, truncate};

/// A canned question and the tab its answer jumps to.
#[derive(Debug, Clone, Copy)]
pub struct PromptLine<'a> {
    pub text: &'a str,
    pub target: &'a str,
}

/// Numbered list of canned questions.
#[derive(Debug, Clone)]
pub struct QuickPromptsWidget<'a> {
    prompts: &'a [PromptLine<'a>],
    theme: Theme,
}

impl<'a> QuickPromptsWidget<'a> {
    pub fn new(prompts: &'a [PromptLine<'a>]) -> Self {
        Self {
            prompts,
            theme: Theme::default(),
        }
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows needed including borders.
    pub fn height(&self) -> u16 {
        self.prompts.len() as u16 + 2
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        // Borders plus the " N " number column.
        let row_width = area.width.saturating_sub(5) as usize;
        let lines: Vec<Line> = self
            .prompts
            .iter()
            .enumerate()
            .map(|(i, prompt)| {
                let target = format!(" → {}", prompt.target);
                let text_width = row_width.saturating_sub(display_width(&target));
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), self.theme.live_style()),
                    Span::styled(truncate(prompt.text, text_width), self.theme.text_style()),
                    Span::styled(target, self.theme.muted_style()),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.unfocused_border())
                .title(" Quick prompts "),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rows(width: u16, prompts: &[PromptLine]) -> Vec<String> {
        let widget = QuickPromptsWidget::new(prompts);
        let mut terminal = Terminal::new(TestBackend::new(width, widget.height())).unwrap();
        terminal
            .draw(|frame| widget.clone().render(frame, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_rows_show_target_tab() {
        let prompts = [
            PromptLine {
                text: "Show me your projects",
                target: "Projects",
            },
            PromptLine {
                text: "How can I contact you?",
                target: "Contact",
            },
        ];
        let rows = rows(46, &prompts);
        assert_eq!(rows.len(), 4);
        assert!(rows[1].contains(" 1 Show me your projects → Projects"));
        assert!(rows[2].contains(" 2 How can I contact you? → Contact"));
    }

    #[test]
    fn test_narrow_width_keeps_target() {
        let prompts = [PromptLine {
            text: "What's your experience?",
            target: "Experience",
        }];
        let rows = rows(30, &prompts);
        assert!(rows[1].contains("→ Experience"));
        assert!(rows[1].contains("..."));
    }
}
