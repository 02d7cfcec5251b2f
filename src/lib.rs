//! Core crate exports for building and running the `varview` terminal browser.
//!
//! The root module primarily re-exports the types an embedder needs to point
//! the browser at a variant service and run it, without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod logging;
mod query;
mod records;
mod systems;
pub mod tui;
pub mod ui;

pub use query::{FIRST_PAGE, SearchQuery};
pub use records::{VariantPage, VariantRecord};
pub use systems::fetch::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, EndpointConfig, FetchError,
    HttpVariantSource, VariantSource,
};
pub use ui::{App, BrowserUi, UiConfig, run};

pub use crate::tui::input::SearchInput;
pub use crate::tui::theme::{Theme, default_theme};
