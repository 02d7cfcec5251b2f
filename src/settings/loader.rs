use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli_with_file(path: &std::path::Path) -> CliArgs {
        CliArgs::parse_from([
            "varview",
            "--no-config",
            "--config",
            path.to_str().expect("utf-8 path"),
        ])
    }

    #[test]
    fn config_files_feed_the_resolved_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("varview.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[endpoint]").unwrap();
        writeln!(file, "base_url = \"https://candl.example.org/variants/\"").unwrap();
        writeln!(file, "page_size = 20").unwrap();
        writeln!(file, "[ui]").unwrap();
        writeln!(file, "theme = \"solarized\"").unwrap();

        let cli = cli_with_file(&path);
        let resolved = load(&cli).expect("loads");

        assert_eq!(
            resolved.endpoint.base_url.as_str(),
            "https://candl.example.org/variants/"
        );
        assert_eq!(resolved.endpoint.page_size, 20);
        assert_eq!(resolved.theme.as_deref(), Some("solarized"));
    }

    #[test]
    fn cli_flags_override_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("varview.toml");
        std::fs::write(&path, "[endpoint]\npage_size = 20\n").unwrap();

        let mut cli = cli_with_file(&path);
        cli.page_size = Some(50);
        let resolved = load(&cli).expect("loads");

        assert_eq!(resolved.endpoint.page_size, 50);
    }

    #[test]
    fn missing_explicit_config_files_error() {
        let cli = CliArgs::parse_from([
            "varview",
            "--no-config",
            "--config",
            "/nonexistent/varview.toml",
        ]);
        assert!(load(&cli).is_err());
    }
}
