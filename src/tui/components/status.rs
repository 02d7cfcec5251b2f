use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
    pub search_input: &'a SearchInput<'a>,
    pub prompt: &'a str,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// What the right-hand status segment of the input row should show.
pub struct StatusState<'a> {
    pub text: &'a str,
    pub show_spinner: bool,
    pub style: Style,
    pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the editable query, and the status segment overlaid at
/// the right edge of the same row.
pub fn render_input_row(frame: &mut Frame, input: InputContext<'_>, status: StatusState<'_>) {
    let InputContext {
        search_input,
        prompt,
        area,
        theme,
    } = input;

    let constraints = layout_constraints(!prompt.is_empty(), prompt_width(prompt));
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    if !prompt.is_empty() {
        let prompt_widget =
            Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
        frame.render_widget(prompt_widget, horizontal[0]);
    }

    let input_area = horizontal[horizontal.len() - 1];
    search_input.render_textarea(frame, input_area);
    render_status(frame, input_area, &status);
}

fn prompt_width(prompt: &str) -> u16 {
    if prompt.is_empty() {
        0
    } else {
        prompt.width() as u16 + 3
    }
}

fn layout_constraints(has_prompt: bool, prompt_width: u16) -> Vec<Constraint> {
    if has_prompt {
        vec![Constraint::Length(prompt_width), Constraint::Min(1)]
    } else {
        vec![Constraint::Min(1)]
    }
}

fn build_status_line(status: &StatusState<'_>) -> Line<'static> {
    let mut line = Line::default();
    if status.show_spinner {
        let spinner = Throbber::default()
            .style(status.style)
            .throbber_style(status.style);
        line.spans.push(spinner.to_symbol_span(status.throbber_state));
    }
    if !status.text.is_empty() {
        line.spans
            .push(Span::styled(status.text.to_string(), status.style));
    }
    line
}

fn render_status(frame: &mut Frame, area: Rect, status: &StatusState<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let line = build_status_line(status);
    let line_width = line.width() as u16;
    if line_width == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    let mut start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };

    // Never paint over the query text the user is editing.
    let input_row = area.top();
    let mut last_char_x: Option<u16> = None;
    for x in area.left()..area.right() {
        if let Some(cell) = buffer.cell((x, input_row))
            && !cell.symbol().trim().is_empty()
        {
            last_char_x = Some(x);
        }
    }
    if let Some(last_x) = last_char_x {
        let min_start = last_x.saturating_add(3);
        if min_start > start_x {
            start_x = min_start;
        }
    }

    if start_x >= area.right() {
        return;
    }
    let max_width = area
        .right()
        .saturating_sub(start_x)
        .min(line_width)
        .min(area.width);
    if max_width == 0 {
        return;
    }

    buffer.set_line(start_x, input_row, &line, max_width);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status<'a>(text: &'a str, show_spinner: bool, throbber: &'a ThrobberState) -> StatusState<'a> {
        StatusState {
            text,
            show_spinner,
            style: Style::default(),
            throbber_state: throbber,
        }
    }

    #[test]
    fn prompt_width_accounts_for_separator() {
        assert_eq!(prompt_width(""), 0);
        assert_eq!(prompt_width("Search by gene"), 17);
    }

    #[test]
    fn layout_includes_a_prompt_section_only_when_present() {
        assert_eq!(layout_constraints(true, 9).len(), 2);
        assert_eq!(layout_constraints(false, 0).len(), 1);
    }

    #[test]
    fn status_line_carries_spinner_and_label_while_loading() {
        let throbber = ThrobberState::default();
        let line = build_status_line(&status("updating", true, &throbber));
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content.as_ref(), "updating");
    }

    #[test]
    fn status_line_is_label_only_when_idle() {
        let throbber = ThrobberState::default();
        let line = build_status_line(&status("2312 variants", false, &throbber));
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn empty_status_renders_nothing() {
        let throbber = ThrobberState::default();
        assert_eq!(build_status_line(&status("", false, &throbber)).width(), 0);
    }
}
