mod cli;
mod settings;

use anyhow::Result;
use cli::parse_cli;
use varview::BrowserUi;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in varview::tui::theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    varview::logging::initialize()?;
    tracing::info!(endpoint = %resolved.endpoint.base_url, "starting varview");

    let mut browser = BrowserUi::new(resolved.endpoint).with_ui_config(resolved.ui);
    if let Some(name) = resolved.theme.as_deref() {
        browser = browser.with_theme_name(name);
    }
    browser.with_initial_term(resolved.initial_term).run()
}
