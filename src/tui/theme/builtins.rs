use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

/// Dark default: slate background, cyan prompt, amber row highlight.
pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    prompt: Style::new().fg(Color::LightCyan),
    empty: Style::new().fg(Color::DarkGray),
    error: Style::new()
        .fg(Color::Rgb(248, 113, 113))
        .add_modifier(Modifier::BOLD),
};

/// Inverted palette for light terminal backgrounds.
pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(203, 213, 225))
        .fg(Color::Rgb(120, 90, 0)),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    error: Style::new()
        .fg(Color::Rgb(185, 28, 28))
        .add_modifier(Modifier::BOLD),
};

pub const SOLARIZED: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .bg(Color::Rgb(7, 54, 66)),
    row_highlight: Style::new()
        .bg(Color::Rgb(0, 43, 54))
        .fg(Color::Rgb(181, 137, 0)),
    prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
    empty: Style::new().fg(Color::Rgb(88, 110, 117)),
    error: Style::new()
        .fg(Color::Rgb(220, 50, 47))
        .add_modifier(Modifier::BOLD),
};

pub(super) const DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        name: "slate",
        theme: SLATE,
        aliases: &["dark", "default"],
    },
    ThemeDefinition {
        name: "light",
        theme: LIGHT,
        aliases: &["paper"],
    },
    ThemeDefinition {
        name: "solarized",
        theme: SOLARIZED,
        aliases: &["solar"],
    },
];

/// Theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}
