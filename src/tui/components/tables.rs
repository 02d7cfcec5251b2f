use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use super::rows::build_variant_rows;
use crate::records::VariantRecord;
use crate::tui::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Column headers for the variant table, in display order.
pub const COLUMN_HEADERS: [&str; 9] = [
    "Gene",
    "Nucleotide Change",
    "Protein Change",
    "Alias",
    "Region",
    "Classification",
    "Last Evaluated",
    "Last Updated",
    "Source",
];

fn column_constraints() -> Vec<Constraint> {
    vec![
        Constraint::Length(10),
        Constraint::Min(22),
        Constraint::Min(16),
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(10),
    ]
}

/// Render one page of variants as a stateful table with a styled header row.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    records: &[VariantRecord],
    theme: &Theme,
) {
    let highlight_spacing = HighlightSpacing::WhenSelected;
    let selection_width = selection_column_width(table_state, &highlight_spacing);
    let constraints = column_constraints();
    let column_widths =
        resolve_column_widths(area, &constraints, selection_width, TABLE_COLUMN_SPACING);
    let rows = build_variant_rows(records, Some(&column_widths));

    let header_cells = COLUMN_HEADERS
        .iter()
        .copied()
        .map(Cell::from)
        .collect::<Vec<_>>();
    let header = Row::new(header_cells)
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(highlight_spacing)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);

    render_header_separator(frame, area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
    if header_height >= area.height {
        return;
    }
    let sep_y = area.y + header_height;
    let width = area.width as usize;
    if width == 0 {
        return;
    }

    let sep_rect = Rect {
        x: area.x,
        y: sep_y,
        width: area.width,
        height: 1,
    };
    let base_style = Style::new().bg(theme.header_bg());
    if width <= 2 {
        let para = Paragraph::new(" ".repeat(width)).style(base_style);
        frame.render_widget(para, sep_rect);
        return;
    }

    let middle = "─".repeat(width - 2);
    let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
    let spans = vec![
        Span::styled(" ", base_style),
        Span::styled(middle, middle_style),
        Span::styled(" ", base_style),
    ];
    let para = Paragraph::new(Text::from(Line::from(spans)));
    frame.render_widget(para, sep_rect);
}

fn selection_column_width(state: &TableState, spacing: &HighlightSpacing) -> u16 {
    let should_add = match spacing {
        HighlightSpacing::Always => true,
        HighlightSpacing::WhenSelected => state.selected().is_some(),
        HighlightSpacing::Never => false,
    };
    if should_add {
        UnicodeWidthStr::width(HIGHLIGHT_SYMBOL) as u16
    } else {
        0
    }
}

fn resolve_column_widths(
    area: Rect,
    constraints: &[Constraint],
    selection_width: u16,
    column_spacing: u16,
) -> Vec<u16> {
    if constraints.is_empty() {
        return Vec::new();
    }

    let layout_area = Rect {
        x: 0,
        y: 0,
        width: area.width,
        height: 1,
    };
    let [_, columns_area] =
        Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
            .areas(layout_area);

    Layout::horizontal(constraints.to_vec())
        .spacing(column_spacing)
        .split(columns_area)
        .iter()
        .map(|rect| rect.width)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_rect(width: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height: 10,
        }
    }

    #[test]
    fn every_header_has_a_width_constraint() {
        assert_eq!(column_constraints().len(), COLUMN_HEADERS.len());
    }

    #[test]
    fn selection_column_reserves_the_symbol_width_when_selected() {
        let mut state = TableState::default();
        assert_eq!(
            selection_column_width(&state, &HighlightSpacing::WhenSelected),
            0
        );
        state.select(Some(0));
        assert_eq!(
            selection_column_width(&state, &HighlightSpacing::WhenSelected),
            2
        );
        assert_eq!(selection_column_width(&state, &HighlightSpacing::Never), 0);
    }

    #[test]
    fn resolved_widths_cover_each_column() {
        let widths = resolve_column_widths(mock_rect(160), &column_constraints(), 2, 1);
        assert_eq!(widths.len(), COLUMN_HEADERS.len());
        assert!(widths.iter().all(|width| *width > 0));

        let spacing = widths.len() as u16 - 1;
        let total: u16 = widths.iter().sum::<u16>() + spacing + 2;
        assert!(total <= 160);
    }

    #[test]
    fn empty_constraints_resolve_to_no_widths() {
        assert!(resolve_column_widths(mock_rect(80), &[], 0, 1).is_empty());
    }
}
