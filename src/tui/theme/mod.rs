//! Color themes for the variant browser.

mod builtins;

pub use builtins::{LIGHT, SLATE, SOLARIZED, default_theme};

use ratatui::style::{Color, Style};

/// Styles applied to the UI chrome.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub error: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn header_bg(&self) -> Color {
        self.header.bg.unwrap_or(Color::Reset)
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

/// Look up a theme by canonical name or alias, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.trim().to_ascii_lowercase();
    builtins::DEFINITIONS.iter().find_map(|definition| {
        let matches = definition.name == normalized
            || definition.aliases.iter().any(|alias| *alias == normalized);
        matches.then_some(definition.theme)
    })
}

/// Canonical names of the built-in themes, in listing order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    builtins::DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve() {
        assert!(by_name("slate").is_some());
        assert!(by_name("light").is_some());
        assert!(by_name("solarized").is_some());
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert!(by_name("Dark").is_some());
        assert!(by_name("PAPER").is_some());
        assert!(by_name(" solar ").is_some());
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert!(by_name("chartreuse").is_none());
    }

    #[test]
    fn names_lists_every_builtin() {
        assert_eq!(names(), vec!["slate", "light", "solarized"]);
    }
}
