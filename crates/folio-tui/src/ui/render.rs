//! Main render function for the TUI.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use folio_core::content::{PROFILE, QUICK_PROMPTS};
use folio_core::{ChatRole, Section};
use folio_tui_components::{
    ChatLine, ChatWidget, Footer, FunFactLine, FunFactsWidget, Header, InputLine, ProgressBar,
    PromptLine, QuickPromptsWidget, StatEntry, StatsPanel, Theme,
};

use super::document::Document;
use crate::state::{Focus, FrameLayout, UiState};

const SIDEBAR_WIDTH: u16 = 46;
const TITLE_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const MIN_CHAT_HEIGHT: u16 = 6;
const STAT_ENTRIES: usize = 4;

/// Render the entire UI and report what was measured.
pub fn render(frame: &mut Frame, state: &UiState) -> FrameLayout {
    let theme = Theme::default();
    let area = frame.area();

    let sidebar_width = SIDEBAR_WIDTH.min(area.width / 2);
    let [main_area, sidebar_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(sidebar_width)]).areas(area);

    let [header_area, progress_area, doc_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(main_area);

    let document = Document::build(doc_area.width.saturating_sub(2) as usize, &theme);
    let doc_lines = document.lines.len();
    let doc_viewport = doc_area.height as usize;
    let scroll = state.doc_scroll.min(doc_lines.saturating_sub(doc_viewport));

    render_header(frame, header_area, state, theme);
    ProgressBar::new(state.progress_width.min(progress_area.width))
        .theme(theme)
        .render(frame, progress_area);
    frame.render_widget(
        Paragraph::new(document.lines).scroll((scroll as u16, 0)),
        doc_area,
    );
    render_footer(frame, footer_area, state, theme);

    let (stats_visible_fraction, chat_max_scroll) =
        render_sidebar(frame, sidebar_area, state, theme);

    FrameLayout {
        doc_lines,
        doc_viewport,
        header_width: header_area.width,
        anchors: document.anchors,
        stats_visible_fraction,
        chat_max_scroll,
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &UiState, theme: Theme) {
    let active = state.active_section();
    let selected = Section::all()
        .iter()
        .position(|section| *section == active)
        .unwrap_or(0);
    let tabs = Section::all().iter().map(|section| section.tab_label()).collect();

    Header::new(PROFILE.name)
        .tabs(tabs, selected)
        .theme(theme)
        .render(frame, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &UiState, theme: Theme) {
    let status = state.status_line();
    let help = match state.focus {
        Focus::Input => "Enter: send | F1-F4: prompts | Shift+Up/Dn: chat | Tab: document | Ctrl+C: quit",
        Focus::Document => "j/k: scroll | g/G: top/bottom | 1-4: prompts | Tab: chat | q: quit",
    };
    Footer::new(&status, help).theme(theme).render(frame, area);
}

/// Heights for the stacked sidebar panels, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SidebarHeights {
    chat: u16,
    prompts: u16,
    stats: u16,
    facts: u16,
}

/// The chat keeps at least its minimum; the stats panel then gets space before the
/// fun facts, so short terminals squeeze it out from the bottom.
fn sidebar_heights(height: u16, prompts: u16, facts_natural: u16) -> SidebarHeights {
    let stats_natural = StatsPanel::natural_height(STAT_ENTRIES);
    let available = height.saturating_sub(TITLE_HEIGHT + prompts + INPUT_HEIGHT);
    let chat = available
        .saturating_sub(stats_natural + facts_natural)
        .max(MIN_CHAT_HEIGHT)
        .min(available);
    let rest = available - chat;
    let stats = rest.min(stats_natural);
    let facts = (rest - stats).min(facts_natural);
    SidebarHeights {
        chat,
        prompts,
        stats,
        facts,
    }
}

/// Returns how much of the stats panel made it on screen and how far the chat
/// can scroll back.
fn render_sidebar(frame: &mut Frame, area: Rect, state: &UiState, theme: Theme) -> (f64, usize) {
    let portfolio = &state.portfolio;
    let prompt_lines: Vec<PromptLine> = QUICK_PROMPTS
        .iter()
        .map(|prompt| PromptLine {
            text: prompt.text,
            target: prompt.action.tab_label(),
        })
        .collect();
    let prompts = QuickPromptsWidget::new(&prompt_lines).theme(theme);
    let fact_lines: Vec<FunFactLine> = portfolio
        .fun_facts()
        .reveals()
        .iter()
        .map(|reveal| FunFactLine {
            revealed: reveal.revealed(),
            target: reveal.target(),
            typing: !reveal.revealed().is_empty() && !reveal.is_complete(),
        })
        .collect();

    let facts = FunFactsWidget::new(&fact_lines).theme(theme);
    let heights = sidebar_heights(area.height, prompts.height(), facts.height(area.width));
    let [title_area, chat_area, prompts_area, input_area, stats_area, facts_area, _] =
        Layout::vertical([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(heights.chat),
            Constraint::Length(heights.prompts),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(heights.stats),
            Constraint::Length(heights.facts),
            Constraint::Fill(1),
        ])
        .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " Ask me about Tahmeed's work",
        theme.muted_style(),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.unfocused_border())
            .title(Span::styled(
                " AI Assistant ",
                theme.heading_style().add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(title, title_area);

    let chat_lines: Vec<ChatLine> = portfolio
        .conversation()
        .transcript()
        .messages()
        .iter()
        .map(|message| ChatLine {
            role: match message.role() {
                ChatRole::User => folio_tui_components::ChatRole::User,
                ChatRole::Assistant => folio_tui_components::ChatRole::Assistant,
            },
            content: message.content(),
            timestamp: message.created_at(),
        })
        .collect();
    let chat = ChatWidget::new(&chat_lines)
        .typing(portfolio.conversation().is_typing())
        .focused(state.focus == Focus::Input)
        .scroll(state.chat_scroll)
        .theme(theme);
    let chat_max_scroll = chat.max_scroll(chat_area);
    chat.render(frame, chat_area);

    prompts.render(frame, prompts_area);

    InputLine::new(&state.input)
        .cursor(state.input_cursor)
        .focused(state.focus == Focus::Input)
        .placeholder("Ask me anything...")
        .theme(theme)
        .render(frame, input_area);

    let stats_natural = StatsPanel::natural_height(STAT_ENTRIES);
    if heights.stats > 0 {
        let stats = portfolio.stats().stats();
        StatsPanel::new(vec![
            StatEntry::new("Commits this month", stats.commits_this_month.to_string()),
            StatEntry::new("Hours coded today", format!("{:.1}", stats.hours_today())),
            StatEntry::new("Lines written", stats.lines_written.to_string()),
            StatEntry::new("Cups of coffee", stats.coffee_count.to_string()),
        ])
        .live(portfolio.stats().phase().is_running())
        .theme(theme)
        .render(frame, stats_area);
    }

    if heights.facts > 0 {
        facts.render(frame, facts_area);
    }

    (
        f64::from(heights.stats) / f64::from(stats_natural),
        chat_max_scroll,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::FUN_FACTS;
    use ratatui::backend::TestBackend;
    use std::time::Duration;
    use ratatui::Terminal;

    fn draw(width: u16, height: u16, state: &UiState) -> (FrameLayout, String) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = render(frame, state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (layout, text)
    }

    #[test]
    fn test_sidebar_heights_tall_terminal() {
        let heights = sidebar_heights(60, 6, 8);
        assert_eq!(heights.stats, 6);
        assert_eq!(heights.facts, 8);
        assert_eq!(heights.chat, 60 - 12 - 14);
    }

    #[test]
    fn test_sidebar_heights_short_terminal() {
        let heights = sidebar_heights(20, 6, 8);
        assert_eq!(heights.chat, 6);
        assert_eq!(heights.stats, 2);
        assert_eq!(heights.facts, 0);

        let tiny = sidebar_heights(10, 6, 8);
        assert_eq!(tiny.chat, 0);
        assert_eq!(tiny.stats, 0);
    }

    #[test]
    fn test_render_reports_layout() {
        let state = UiState::new();
        let (layout, text) = draw(120, 40, &state);

        assert_eq!(layout.header_width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.doc_viewport, 40 - 5);
        assert!(layout.doc_lines > layout.doc_viewport);
        assert_eq!(layout.anchors.len(), Section::all().len());
        assert_eq!(layout.stats_visible_fraction, 1.0);

        assert!(text.contains("AI Assistant"));
        assert!(text.contains("Commits this month"));
        assert!(text.contains("Tahmeed"));
        assert!(text.contains("Show me your projects → Projects"));
    }

    #[test]
    fn test_settled_fun_facts_shown_in_full() {
        let mut state = UiState::new();
        state.portfolio.observe_stats_visibility(1.0, Duration::ZERO);
        state.portfolio.advance(Duration::from_secs(20));
        let (_, text) = draw(120, 40, &state);

        let sidebar = text
            .lines()
            .map(|row| row.chars().skip((120 - SIDEBAR_WIDTH) as usize).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        for fact in FUN_FACTS {
            for word in fact.text.split_whitespace() {
                assert!(sidebar.contains(word), "{word:?} missing from {:?}", fact.text);
            }
        }
    }

    #[test]
    fn test_scrolled_chat_shows_greeting_again() {
        let mut state = UiState::new();
        for index in 0..QUICK_PROMPTS.len() {
            state.send_quick_prompt(index, Duration::ZERO);
        }
        state.portfolio.advance(Duration::from_secs(10));

        let (layout, text) = draw(120, 40, &state);
        assert!(layout.chat_max_scroll > 0);
        assert!(!text.contains("Hi! I'm Tahmeed's"));

        state.apply_layout(layout, Duration::from_secs(10));
        state.scroll_chat(-(state.layout.chat_max_scroll as isize));
        assert_eq!(state.chat_scroll, 0);
        let (_, text) = draw(120, 40, &state);
        assert!(text.contains("Hi! I'm Tahmeed's"));
    }

    #[test]
    fn test_short_terminal_hides_stats() {
        let state = UiState::new();
        let (layout, text) = draw(120, 18, &state);

        assert_eq!(layout.stats_visible_fraction, 0.0);
        assert!(!text.contains("Commits this month"));
    }
}
