use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl<'a> App<'a> {
    /// Handle one key press. Returns true when the app should exit.
    ///
    /// Typing only edits the draft; nothing is fetched until Enter submits
    /// it. Paging and refresh act on the already-submitted query.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Enter => {
                let term = self.search_input.text().to_string();
                self.submit_search(term);
            }
            KeyCode::PageDown => self.next_page(),
            KeyCode::PageUp => self.previous_page(),
            KeyCode::F(5) => self.refresh(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {
                self.search_input.input(key);
            }
        }
        false
    }

    fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let len = self.rows().len();
            if selected + 1 < len {
                self.table_state.select(Some(selected + 1));
            }
        }
    }
}
