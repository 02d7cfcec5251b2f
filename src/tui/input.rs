use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line editor for the query term, backed by `tui-textarea`.
///
/// The editor holds the draft the user is typing; nothing is submitted until
/// the caller decides to read `text()` out. Enter never reaches this widget,
/// so the content stays one line.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::from([initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Feed a key event to the editor. Returns whether the draft changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// The current draft text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Replace the draft, moving the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        let mut textarea = TextArea::from([text.to_string()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        Self::new("")
    }
}
