use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use throbber_widgets_tui::Throbber;

use super::App;
use crate::systems::fetch::FetchError;
use crate::tui::components::{
    InputContext, PagerContext, StatusState, render_footer, render_input_row, render_table,
};

const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_query_row(frame, layout[0]);
        self.render_results(frame, layout[1]);
        self.render_footer_row(frame, layout[2]);
    }

    fn render_query_row(&mut self, frame: &mut Frame, area: Rect) {
        let (status_text, status_style, show_spinner) = self.status_segment();
        let input_ctx = InputContext {
            search_input: &self.search_input,
            prompt: &self.ui.prompt,
            area,
            theme: &self.theme,
        };
        let status = StatusState {
            text: &status_text,
            show_spinner,
            style: status_style,
            throbber_state: &self.throbber_state,
        };
        render_input_row(frame, input_ctx, status);
    }

    /// Status shown at the right edge of the input row: the failure if the
    /// last fetch produced one, otherwise the running total, with a spinner
    /// while a refresh keeps the previous page on screen.
    fn status_segment(&self) -> (String, Style, bool) {
        if let Some(error) = self.last_error() {
            return (status_error_text(error), self.theme.error_style(), false);
        }
        if !self.has_any_result() {
            // The very first fetch announces itself in the results area.
            return (String::new(), self.theme.empty_style(), false);
        }
        let text = format!("{} {}", self.total_count(), self.ui.count_label);
        (text, self.theme.empty_style(), self.is_loading())
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        if !self.has_any_result() {
            self.render_first_load(frame, area);
            return;
        }

        let records = self
            .results
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or_default();
        render_table(frame, area, &mut self.table_state, records, &self.theme);

        if records.is_empty() && area.height > HEADER_AND_DIVIDER_HEIGHT {
            let message_area = Rect {
                y: area.y + HEADER_AND_DIVIDER_HEIGHT,
                height: area.height - HEADER_AND_DIVIDER_HEIGHT,
                ..area
            };
            let empty = Paragraph::new("No matching variants")
                .alignment(Alignment::Center)
                .style(self.theme.empty_style());
            frame.render_widget(Clear, message_area);
            frame.render_widget(empty, message_area);
        }
    }

    /// Before the first page ever arrives there is no table to draw; show a
    /// centered fetch notice, or the failure if the first fetch died.
    fn render_first_load(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let line_area = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };

        let line = if let Some(error) = self.last_error() {
            Line::from(Span::styled(
                format!("{} (press F5 to retry)", status_error_text(error)),
                self.theme.error_style(),
            ))
        } else {
            let muted = self.theme.empty_style();
            let spinner = Throbber::default().style(muted).throbber_style(muted);
            let mut line = Line::default();
            line.spans.push(spinner.to_symbol_span(&self.throbber_state));
            line.spans.push(Span::styled(" Fetching variants", muted));
            line
        };

        let notice = Paragraph::new(line).alignment(Alignment::Center);
        frame.render_widget(notice, line_area);
    }

    fn render_footer_row(&self, frame: &mut Frame, area: Rect) {
        if !self.has_any_result() {
            return;
        }
        let pager = PagerContext {
            page_index: self.page_index(),
            page_size: self.page_size(),
            rows_on_page: self.rows().len(),
            total_count: self.total_count(),
            page_count: self.page_count(),
        };
        let trailing = match self.selected_record() {
            Some(record) if !record.url.is_empty() => record.url.as_str(),
            _ => self.ui.hint.as_str(),
        };
        render_footer(frame, area, &pager, trailing, &self.theme);
    }
}

/// Compact one-line rendering of a fetch failure for the status segment.
fn status_error_text(error: &FetchError) -> String {
    match error {
        FetchError::Transport { .. } => "fetch failed: connection error".to_string(),
        FetchError::Timeout { .. } => "fetch failed: timed out".to_string(),
        FetchError::Status { status, .. } => format!("fetch failed: HTTP {status}"),
        FetchError::Payload { .. } => "fetch failed: bad response".to_string(),
    }
}
