//! UI state for rendering.

use std::time::Duration;

use tracing::debug;

use folio_core::{progress_width, ConversationEffect, Portfolio, Section, ViewportMetrics};

/// Narrowest the progress bar gets, in columns.
pub const MIN_PROGRESS_WIDTH: u16 = 2;

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Document,
}

/// Measurements taken while drawing the last frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLayout {
    /// Total document lines at the current width.
    pub doc_lines: usize,
    /// Document rows visible on screen.
    pub doc_viewport: usize,
    /// Width of the header the progress bar spans.
    pub header_width: u16,
    /// First document line of each section.
    pub anchors: Vec<(Section, usize)>,
    /// Rendered rows of the stats panel over its natural rows.
    pub stats_visible_fraction: f64,
    /// Chat lines that fit above the visible ones.
    pub chat_max_scroll: usize,
}

struct DocumentViewport<'a> {
    offset: usize,
    layout: &'a FrameLayout,
}

impl ViewportMetrics for DocumentViewport<'_> {
    fn scroll_offset(&self) -> f64 {
        self.offset as f64
    }

    fn scroll_height(&self) -> f64 {
        self.layout.doc_lines as f64
    }

    fn viewport_height(&self) -> f64 {
        self.layout.doc_viewport as f64
    }

    fn header_width(&self) -> f64 {
        f64::from(self.layout.header_width)
    }
}

/// Everything the renderer needs (no async, no locks).
pub struct UiState {
    pub portfolio: Portfolio,
    pub focus: Focus,
    pub input: String,
    /// Cursor position in characters.
    pub input_cursor: usize,
    pub doc_scroll: usize,
    /// First visible chat line; `usize::MAX` follows the newest message.
    pub chat_scroll: usize,
    pub progress_width: u16,
    /// A throttled viewport event was dropped since the last recompute.
    progress_stale: bool,
    /// Section to open at once the document has been measured.
    start_section: Option<Section>,
    pub layout: FrameLayout,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            portfolio: Portfolio::new(),
            focus: Focus::default(),
            input: String::new(),
            input_cursor: 0,
            doc_scroll: 0,
            chat_scroll: usize::MAX,
            progress_width: MIN_PROGRESS_WIDTH,
            progress_stale: false,
            start_section: None,
            layout: FrameLayout::default(),
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the document at `section` instead of the top.
    pub fn with_start_section(mut self, section: Option<Section>) -> Self {
        self.start_section = section;
        self
    }

    /// Record the measurements of a drawn frame.
    ///
    /// Returns true when this frame made the stats panel visible enough to start the
    /// animations.
    pub fn apply_layout(&mut self, layout: FrameLayout, now: Duration) -> bool {
        let fraction = layout.stats_visible_fraction;
        if layout != self.layout {
            self.layout = layout;
            self.doc_scroll = self.doc_scroll.min(self.max_scroll());
            self.on_viewport_event(now);
        }
        if !self.layout.anchors.is_empty() {
            if let Some(section) = self.start_section.take() {
                self.scroll_to_section(section, now);
            }
        }
        // Catch up on whatever the throttle dropped, once per frame.
        if self.progress_stale {
            self.recompute_progress();
        }
        self.portfolio.observe_stats_visibility(fraction, now)
    }

    /// Act on a due conversation effect.
    pub fn apply_effect(&mut self, effect: ConversationEffect, now: Duration) {
        match effect {
            ConversationEffect::ScrollTo(section) => self.scroll_to_section(section, now),
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.layout.doc_lines.saturating_sub(self.layout.doc_viewport)
    }

    pub fn scroll_by(&mut self, delta: isize, now: Duration) {
        let target = self.doc_scroll.saturating_add_signed(delta);
        self.set_scroll(target, now);
    }

    pub fn scroll_page(&mut self, down: bool, now: Duration) {
        let page = self.layout.doc_viewport.saturating_sub(1).max(1) as isize;
        self.scroll_by(if down { page } else { -page }, now);
    }

    pub fn scroll_to_top(&mut self, now: Duration) {
        self.set_scroll(0, now);
    }

    pub fn scroll_to_bottom(&mut self, now: Duration) {
        self.set_scroll(self.max_scroll(), now);
    }

    pub fn scroll_to_section(&mut self, section: Section, now: Duration) {
        let Some(line) = self
            .layout
            .anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
        else {
            return;
        };
        debug!(section = %section, line, "Scrolling to section");
        self.set_scroll(line, now);
    }

    fn set_scroll(&mut self, line: usize, now: Duration) {
        let line = line.min(self.max_scroll());
        if line != self.doc_scroll {
            self.doc_scroll = line;
            self.on_viewport_event(now);
        }
    }

    /// Recompute layout-derived values, at most once per throttle window.
    fn on_viewport_event(&mut self, now: Duration) {
        if self.portfolio.viewport_changed(now) {
            self.recompute_progress();
        } else {
            self.progress_stale = true;
        }
    }

    fn recompute_progress(&mut self) {
        let metrics = DocumentViewport {
            offset: self.doc_scroll,
            layout: &self.layout,
        };
        self.progress_width = progress_width(&metrics, f64::from(MIN_PROGRESS_WIDTH)).round() as u16;
        self.progress_stale = false;
    }

    /// Move the chat view by `delta` lines. Reaching the bottom resumes following
    /// new messages.
    pub fn scroll_chat(&mut self, delta: isize) {
        let max = self.layout.chat_max_scroll;
        let current = self.chat_scroll.min(max);
        let next = current.saturating_add_signed(delta).min(max);
        self.chat_scroll = if next >= max { usize::MAX } else { next };
    }

    /// Section currently at the top of the document view.
    pub fn active_section(&self) -> Section {
        let max_scroll = self.max_scroll();
        if max_scroll > 0 && self.doc_scroll >= max_scroll {
            if let Some((section, _)) = self.layout.anchors.last() {
                return *section;
            }
        }
        self.layout
            .anchors
            .iter()
            .rev()
            .find(|(_, line)| *line <= self.doc_scroll)
            .map(|(section, _)| *section)
            .unwrap_or_default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Document,
            Focus::Document => Focus::Input,
        };
    }

    pub fn insert_char(&mut self, ch: char) {
        let index = self.byte_index(self.input_cursor);
        self.input.insert(index, ch);
        self.input_cursor += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        self.input_cursor -= 1;
        let index = self.byte_index(self.input_cursor);
        self.input.remove(index);
    }

    pub fn delete_at_cursor(&mut self) {
        if self.input_cursor < self.input.chars().count() {
            let index = self.byte_index(self.input_cursor);
            self.input.remove(index);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.input_cursor = self.input_cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.input_cursor = (self.input_cursor + 1).min(self.input.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.input_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.input_cursor = self.input.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Send the input line. Blank input stays in place and nothing is sent.
    pub fn submit_input(&mut self, now: Duration) -> bool {
        if self.portfolio.send(&self.input, now).is_none() {
            return false;
        }
        self.input.clear();
        self.input_cursor = 0;
        self.chat_scroll = usize::MAX;
        true
    }

    pub fn send_quick_prompt(&mut self, index: usize, now: Duration) {
        match self.portfolio.send_quick_prompt(index, now) {
            Ok(_) => self.chat_scroll = usize::MAX,
            Err(e) => debug!(error = %e, "Ignoring quick prompt"),
        }
    }

    /// Status shown in the footer.
    pub fn status_line(&self) -> String {
        if self.portfolio.conversation().is_typing() {
            return "Assistant is typing...".to_string();
        }
        format!(
            "{} | {} messages",
            self.active_section().tab_label(),
            self.portfolio.conversation().transcript().messages().len()
        )
    }
}
