use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use varview::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("varview {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "varview",
    version,
    long_version = long_version(),
    about = "Interactive terminal browser for genomic variant records",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `varview` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "VARVIEW_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'e',
        long,
        value_name = "URL",
        env = "VARVIEW_ENDPOINT",
        help = "Override the search endpoint base URL (default: http://localhost:8000/variants/)"
    )]
    pub(crate) endpoint: Option<String>,
    #[arg(
        long = "page-size",
        value_name = "NUM",
        help = "Number of records requested per page (default: 15)"
    )]
    pub(crate) page_size: Option<u32>,
    #[arg(
        long,
        value_name = "SECS",
        help = "HTTP request timeout in seconds (default: 10)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        short = 'g',
        long,
        value_name = "TERM",
        help = "Submit a search term when the browser starts (default: none)"
    )]
    pub(crate) gene: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let parsed = CliArgs::parse_from(["varview"]);
        assert!(parsed.endpoint.is_none());
        assert!(parsed.gene.is_none());
        assert!(!parsed.list_themes);
    }

    #[test]
    fn endpoint_and_paging_flags_are_parsed() {
        let parsed = CliArgs::parse_from([
            "varview",
            "--endpoint",
            "https://example.org/variants/",
            "--page-size",
            "25",
            "--timeout",
            "30",
            "-g",
            "BRCA1",
        ]);
        assert_eq!(
            parsed.endpoint.as_deref(),
            Some("https://example.org/variants/")
        );
        assert_eq!(parsed.page_size, Some(25));
        assert_eq!(parsed.timeout, Some(30));
        assert_eq!(parsed.gene.as_deref(), Some("BRCA1"));
    }

    #[test]
    fn config_flag_collects_multiple_files() {
        let parsed = CliArgs::parse_from(["varview", "-c", "a.toml", "-c", "b.toml"]);
        assert_eq!(
            parsed.config,
            vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
        );
    }
}
