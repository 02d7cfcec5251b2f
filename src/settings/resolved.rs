use varview::{EndpointConfig, UiConfig};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub endpoint: EndpointConfig,
    pub ui: UiConfig,
    pub theme: Option<String>,
    pub initial_term: String,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Endpoint: {}", self.endpoint.base_url);
        println!("  Page size: {}", self.endpoint.page_size);
        println!("  Timeout: {}s", self.endpoint.timeout.as_secs());
        println!(
            "  Theme: {}",
            self.theme.as_deref().unwrap_or("(built-in default)")
        );
        println!("  Prompt: {}", self.ui.prompt);
        println!("  Count label: {}", self.ui.count_label);
        if !self.initial_term.is_empty() {
            println!("  Initial search: {}", self.initial_term);
        }
    }
}
