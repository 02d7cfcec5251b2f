//! Interactive terminal UI orchestration for `varview`.
//!
//! The [`builder`] module exposes the public-facing [`BrowserUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, key
//! handling, and the query/result state driving the terminal application.

mod actions;
mod builder;
mod config;
mod fetch;
mod render;
mod runtime;
mod state;

pub use builder::BrowserUi;
pub use config::UiConfig;
pub use runtime::run;
pub use state::App;
