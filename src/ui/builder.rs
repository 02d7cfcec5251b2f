use anyhow::Result;

use super::App;
use super::config::UiConfig;
use crate::systems::fetch::{EndpointConfig, HttpVariantSource, VariantSource};
use crate::tui::theme::{self, Theme};

/// A small builder for configuring the interactive variant browser.
/// This sets the endpoint, labels, theme and an optional startup
/// filter before handing control to the terminal event loop.
pub struct BrowserUi {
    endpoint: EndpointConfig,
    ui_config: Option<UiConfig>,
    theme: Option<Theme>,
    initial_term: String,
}

impl BrowserUi {
    /// Create a new browser UI for the provided endpoint.
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            ui_config: None,
            theme: None,
            initial_term: String::new(),
        }
    }

    pub fn with_ui_config(mut self, config: UiConfig) -> Self {
        self.ui_config = Some(config);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Select a theme by name; unknown names leave the default in place.
    pub fn with_theme_name(mut self, name: &str) -> Self {
        if let Some(theme) = theme::by_name(name) {
            self.theme = Some(theme);
        }
        self
    }

    /// Filter term submitted automatically when the browser starts.
    pub fn with_initial_term(mut self, term: impl Into<String>) -> Self {
        self.initial_term = term.into();
        self
    }

    /// Run the interactive browser against the live HTTP service.
    pub fn run(self) -> Result<()> {
        let source = HttpVariantSource::new(&self.endpoint)?;
        self.run_with_source(source)
    }

    /// Run the browser over a custom record source.
    pub fn run_with_source(self, source: impl VariantSource) -> Result<()> {
        let mut app = App::with_source(&self.endpoint, source);
        if let Some(ui) = self.ui_config {
            app.ui = ui;
        }
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        if !self.initial_term.is_empty() {
            app.set_initial_term(&self.initial_term);
        }
        app.run()
    }
}
