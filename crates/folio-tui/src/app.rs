//! Application state and main event loop.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::debug;

use folio_core::Section;

use crate::event::{BackendCommand, UiEvent};
use crate::state::{Focus, FrameLayout, UiState};
use crate::ui;

/// Main application with UI state and channel handles.
pub struct App {
    /// Current UI state snapshot for rendering.
    state: UiState,

    /// Session start; every animation is driven by time elapsed since.
    started: Instant,

    /// Receiver for events from the backend.
    ui_rx: mpsc::Receiver<UiEvent>,

    /// Sender for commands to the backend.
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl App {
    /// Create a new application instance with channel handles.
    pub fn new(ui_rx: mpsc::Receiver<UiEvent>, cmd_tx: mpsc::Sender<BackendCommand>) -> Self {
        Self {
            state: UiState::new(),
            started: Instant::now(),
            ui_rx,
            cmd_tx,
        }
    }

    /// Open the document at `section` once it has been measured.
    pub fn start_at(mut self, section: Option<Section>) -> Self {
        self.state = self.state.with_start_section(section);
        self
    }

    /// Run the main event loop.
    ///
    /// This runs on the main thread and handles:
    /// - Advancing the chat and animations
    /// - Drawing the UI and feeding its measurements back into the state
    /// - Processing keyboard input
    /// - Receiving updates from the backend
    pub fn run(&mut self, mut terminal: DefaultTerminal, tick_rate: Duration) -> std::io::Result<()> {
        loop {
            let now = self.started.elapsed();
            self.tick(now);

            let mut layout = FrameLayout::default();
            terminal.draw(|frame| layout = ui::render(frame, &self.state))?;
            self.apply_layout(layout, now);

            // Resize events need no handling: the next draw measures the new size.
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key, self.started.elapsed())
                    {
                        break; // quit requested
                    }
                }
            }

            while let Ok(event) = self.ui_rx.try_recv() {
                self.apply_event(event);
            }
        }

        let _ = self.cmd_tx.blocking_send(BackendCommand::Quit);

        Ok(())
    }

    /// Advance the chat and animations to `now`.
    fn tick(&mut self, now: Duration) {
        for effect in self.state.portfolio.advance(now) {
            self.state.apply_effect(effect, now);
        }
    }

    fn apply_layout(&mut self, layout: FrameLayout, now: Duration) {
        if self.state.apply_layout(layout, now) {
            debug!("Requesting commit total");
            let _ = self.cmd_tx.blocking_send(BackendCommand::FetchActivity);
        }
    }

    /// Apply an event from the backend to the UI state.
    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::ActivityResolved(total) => {
                self.state.portfolio.set_commit_target(total);
            }
        }
    }

    /// Handle a key press.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent, now: Duration) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        // Keys that work regardless of focus
        match key.code {
            KeyCode::F(n @ 1..=4) => {
                self.state.send_quick_prompt(usize::from(n) - 1, now);
                return false;
            }
            KeyCode::PageUp => {
                self.state.scroll_page(false, now);
                return false;
            }
            KeyCode::PageDown => {
                self.state.scroll_page(true, now);
                return false;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.toggle_focus();
                return false;
            }
            _ => {}
        }

        match self.state.focus {
            Focus::Input => {
                self.handle_input_key(key, now);
                false
            }
            Focus::Document => self.handle_document_key(key.code, now),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Duration) {
        match key.code {
            KeyCode::Enter => {
                if self.state.submit_input(now) {
                    debug!("Message sent");
                }
            }
            KeyCode::Esc => self.state.focus = Focus::Document,
            KeyCode::Backspace => self.state.delete_before_cursor(),
            KeyCode::Delete => self.state.delete_at_cursor(),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.state.scroll_chat(-1)
            }
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.state.scroll_chat(1)
            }
            KeyCode::Left => self.state.move_cursor_left(),
            KeyCode::Right => self.state.move_cursor_right(),
            KeyCode::Home => self.state.move_cursor_home(),
            KeyCode::End => self.state.move_cursor_end(),
            KeyCode::Up => self.state.scroll_by(-1, now),
            KeyCode::Down => self.state.scroll_by(1, now),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.insert_char(ch);
            }
            _ => {}
        }
    }

    /// Returns true if the app should quit.
    fn handle_document_key(&mut self, code: KeyCode, now: Duration) -> bool {
        match code {
            KeyCode::Char('q') => return true,

            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_by(-1, now),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_by(1, now),
            KeyCode::Char(' ') => self.state.scroll_page(true, now),
            KeyCode::Home | KeyCode::Char('g') => self.state.scroll_to_top(now),
            KeyCode::End | KeyCode::Char('G') => self.state.scroll_to_bottom(now),

            // Quick prompts by number
            KeyCode::Char(ch @ '1'..='4') => {
                let index = ch as usize - '1' as usize;
                self.state.send_quick_prompt(index, now);
            }

            KeyCode::Enter | KeyCode::Char('i') => self.state.focus = Focus::Input,

            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::FALLBACK_COMMITS;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn app() -> (App, mpsc::Sender<UiEvent>, mpsc::Receiver<BackendCommand>) {
        let (ui_tx, ui_rx) = mpsc::channel(8);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        (App::new(ui_rx, cmd_tx), ui_tx, cmd_rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn layout(stats_visible_fraction: f64) -> FrameLayout {
        FrameLayout {
            doc_lines: 120,
            doc_viewport: 30,
            header_width: 80,
            anchors: vec![
                (Section::Hero, 0),
                (Section::About, 12),
                (Section::Projects, 40),
                (Section::Experience, 70),
                (Section::Contact, 100),
            ],
            stats_visible_fraction,
            chat_max_scroll: 12,
        }
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        assert!(app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            ms(0)
        ));

        // 'q' is text while typing, quit while reading.
        assert!(!app.handle_key(key(KeyCode::Char('q')), ms(0)));
        assert_eq!(app.state.input, "q");
        assert!(!app.handle_key(key(KeyCode::Esc), ms(0)));
        assert!(app.handle_key(key(KeyCode::Char('q')), ms(0)));
    }

    #[test]
    fn test_typed_question_gets_answer_and_scroll() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        app.apply_layout(layout(0.0), ms(0));

        for ch in "What projects?".chars() {
            app.handle_key(key(KeyCode::Char(ch)), ms(10));
        }
        app.handle_key(key(KeyCode::Enter), ms(100));
        assert!(app.state.input.is_empty());
        assert_eq!(app.state.portfolio.conversation().transcript().messages().len(), 2);

        app.tick(ms(1100));
        assert_eq!(app.state.portfolio.conversation().transcript().messages().len(), 3);
        assert_eq!(app.state.doc_scroll, 0);

        app.tick(ms(1600));
        assert_eq!(app.state.doc_scroll, 40);
        assert_eq!(app.state.active_section(), Section::Projects);
    }

    #[test]
    fn test_quick_prompt_keys() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        app.handle_key(key(KeyCode::F(2)), ms(0));
        app.handle_key(key(KeyCode::Tab), ms(0));
        app.handle_key(key(KeyCode::Char('4')), ms(0));
        app.handle_key(key(KeyCode::F(9)), ms(0));

        let transcript = app.state.portfolio.conversation().transcript();
        assert_eq!(transcript.messages().len(), 3);
    }

    #[test]
    fn test_visibility_requests_activity_once() {
        let (mut app, _ui_tx, mut cmd_rx) = app();
        app.apply_layout(layout(0.0), ms(0));
        assert!(cmd_rx.try_recv().is_err());

        app.apply_layout(layout(1.0), ms(50));
        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::FetchActivity));

        app.apply_layout(layout(1.0), ms(100));
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn test_activity_sets_commit_target() {
        let (mut app, ui_tx, _cmd_rx) = app();
        ui_tx
            .try_send(UiEvent::ActivityResolved(FALLBACK_COMMITS))
            .unwrap();
        while let Ok(event) = app.ui_rx.try_recv() {
            app.apply_event(event);
        }
        assert_eq!(app.state.portfolio.stats().commit_target(), FALLBACK_COMMITS);
    }

    #[test]
    fn test_document_navigation() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        app.apply_layout(layout(0.0), ms(0));
        app.handle_key(key(KeyCode::Tab), ms(0));

        app.handle_key(key(KeyCode::Char('G')), ms(100));
        assert_eq!(app.state.doc_scroll, 90);
        app.handle_key(key(KeyCode::Char('k')), ms(200));
        assert_eq!(app.state.doc_scroll, 89);
        app.handle_key(key(KeyCode::Char('g')), ms(300));
        assert_eq!(app.state.doc_scroll, 0);
    }

    #[test]
    fn test_start_at_section() {
        let (app, _ui_tx, _cmd_rx) = app();
        let mut app = app.start_at(Some(Section::Experience));
        app.apply_layout(layout(0.0), ms(0));
        assert_eq!(app.state.doc_scroll, 70);
        assert_eq!(app.state.active_section(), Section::Experience);
    }

    #[test]
    fn test_shift_arrows_scroll_chat_not_document() {
        let (mut app, _ui_tx, _cmd_rx) = app();
        app.apply_layout(layout(0.0), ms(0));

        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT), ms(100));
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT), ms(200));
        assert_eq!(app.state.chat_scroll, 10);
        assert_eq!(app.state.doc_scroll, 0);

        app.handle_key(key(KeyCode::Down), ms(300));
        assert_eq!(app.state.doc_scroll, 1);
        assert_eq!(app.state.chat_scroll, 10);

        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT), ms(400));
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT), ms(500));
        assert_eq!(app.state.chat_scroll, usize::MAX);
    }
}
