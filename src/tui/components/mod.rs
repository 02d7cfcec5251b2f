//! Reusable widgets for the variant browser screen.

mod pager;
mod rows;
mod status;
mod tables;

pub use pager::{PagerContext, page_label, range_label, render_footer};
pub use rows::build_variant_rows;
pub use status::{InputContext, StatusState, render_input_row};
pub use tables::{COLUMN_HEADERS, render_table};
