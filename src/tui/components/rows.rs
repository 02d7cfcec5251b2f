use std::borrow::Cow;

use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::records::VariantRecord;

/// Build the table rows for one page of variants, fitting each cell to the
/// resolved column widths.
#[must_use]
pub fn build_variant_rows<'a>(
    records: &'a [VariantRecord],
    column_widths: Option<&[u16]>,
) -> Vec<Row<'a>> {
    let width_at = |index: usize| column_widths.and_then(|widths| widths.get(index)).copied();
    records
        .iter()
        .map(|record| {
            Row::new([
                fit_cell(&record.gene, width_at(0)),
                fit_cell(&record.nucleotide_change, width_at(1)),
                fit_cell(&record.protein_change, width_at(2)),
                fit_cell(&record.alias, width_at(3)),
                fit_cell(&record.region, width_at(4)),
                fit_cell(&record.reported_classification, width_at(5)),
                fit_cell(record.last_evaluated.as_deref().unwrap_or(""), width_at(6)),
                fit_cell(record.last_updated.as_deref().unwrap_or(""), width_at(7)),
                fit_cell(&record.source, width_at(8)),
            ])
        })
        .collect()
}

fn fit_cell(text: &str, max_width: Option<u16>) -> Cell<'_> {
    Cell::from(fit_text(text, max_width))
}

/// Fit `text` into `max_width` terminal cells, ending with an ellipsis when
/// content is cut.
fn fit_text(text: &str, max_width: Option<u16>) -> Cow<'_, str> {
    let Some(width) = max_width.map(usize::from) else {
        return Cow::Borrowed(text);
    };
    if width == 0 {
        return Cow::Borrowed("");
    }
    if text.width() <= width {
        return Cow::Borrowed(text);
    }

    let ellipsis = "…";
    let ellipsis_width = ellipsis.width();
    if width <= ellipsis_width {
        return Cow::Borrowed(ellipsis);
    }

    let (kept, _) = text.unicode_truncate(width - ellipsis_width);
    Cow::Owned(format!("{kept}{ellipsis}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gene: &str, nucleotide_change: &str) -> VariantRecord {
        VariantRecord {
            gene: gene.to_string(),
            nucleotide_change: nucleotide_change.to_string(),
            ..VariantRecord::default()
        }
    }

    #[test]
    fn builds_one_row_per_record() {
        let records = vec![
            record("BRCA1", "NM_007294.3:c.5266dupC"),
            record("BRCA2", "NM_000059.3:c.6275_6276delTT"),
        ];
        assert_eq!(build_variant_rows(&records, None).len(), 2);
        assert!(build_variant_rows(&[], None).is_empty());
    }

    #[test]
    fn short_text_is_borrowed_unchanged() {
        assert_eq!(fit_text("BRCA1", Some(10)), "BRCA1");
        assert_eq!(fit_text("BRCA1", Some(5)), "BRCA1");
        assert_eq!(fit_text("BRCA1", None), "BRCA1");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        assert_eq!(fit_text("NM_007294.3:c.5266dupC", Some(12)), "NM_007294.3…");
    }

    #[test]
    fn tiny_widths_degrade_to_the_ellipsis_alone() {
        assert_eq!(fit_text("Pathogenic", Some(1)), "…");
        assert_eq!(fit_text("Pathogenic", Some(0)), "");
    }
}
