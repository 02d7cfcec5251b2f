use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::theme::Theme;

/// Numbers the footer needs to describe the visible slice of results.
#[derive(Debug, Clone, Copy)]
pub struct PagerContext {
    /// 0-based index of the page on display.
    pub page_index: u32,
    pub page_size: u32,
    /// How many rows the current page actually holds.
    pub rows_on_page: usize,
    pub total_count: u64,
    pub page_count: u64,
}

/// Range of the visible slice, e.g. `31–45 of 2312`, or `0–0 of 0` when
/// nothing matches.
#[must_use]
pub fn range_label(pager: &PagerContext) -> String {
    if pager.rows_on_page == 0 {
        return format!("0–0 of {}", pager.total_count);
    }
    let from = u64::from(pager.page_index) * u64::from(pager.page_size) + 1;
    let to = from + pager.rows_on_page as u64 - 1;
    format!("{from}–{to} of {}", pager.total_count)
}

/// Page position, e.g. `page 3/155`. A page past the end is reported as-is
/// (`page 9/3`) so the drift stays visible.
#[must_use]
pub fn page_label(pager: &PagerContext) -> String {
    let page = u64::from(pager.page_index) + 1;
    format!("page {page}/{}", pager.page_count.max(1))
}

/// Render the footer row: result range and page position on the left, a
/// trailing context string right-aligned.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    pager: &PagerContext,
    trailing: &str,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let label = format!("{} · {}", range_label(pager), page_label(pager));
    let trailing_width = (trailing.width() as u16).min(area.width / 2);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(trailing_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(label).style(theme.empty_style()),
        left_area,
    );
    if trailing_width > 0 {
        frame.render_widget(
            Paragraph::new(trailing)
                .style(theme.empty_style())
                .right_aligned(),
            right_area,
        );
    }
}
