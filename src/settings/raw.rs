use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use url::Url;

use varview::tui::theme;
use varview::{
    DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, EndpointConfig, UiConfig,
};

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    endpoint: EndpointSection,
    ui: UiSection,
}

/// Endpoint connection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct EndpointSection {
    base_url: Option<String>,
    page_size: Option<u32>,
    timeout_secs: Option<u64>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    initial_gene: Option<String>,
    prompt: Option<String>,
    count_label: Option<String>,
    hint: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.endpoint.clone() {
            self.endpoint.base_url = Some(url);
        }
        if let Some(size) = cli.page_size {
            self.endpoint.page_size = Some(size);
        }
        if let Some(secs) = cli.timeout {
            self.endpoint.timeout_secs = Some(secs);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(gene) = cli.gene.clone() {
            self.ui.initial_gene = Some(gene);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let base_url = self
            .endpoint
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid endpoint base URL {base_url:?}"))?;
        ensure!(
            matches!(base_url.scheme(), "http" | "https"),
            "endpoint base URL must use http or https, got {:?}",
            base_url.scheme()
        );

        let page_size = self.endpoint.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        ensure!(page_size >= 1, "endpoint page size must be at least 1");

        let timeout_secs = self.endpoint.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        ensure!(timeout_secs >= 1, "endpoint timeout must be at least 1 second");

        if let Some(name) = self.ui.theme.as_deref() {
            ensure!(
                theme::by_name(name).is_some(),
                "unknown theme {name:?}; run with --list-themes to see the choices"
            );
        }

        let mut ui = UiConfig::default();
        if let Some(prompt) = self.ui.prompt {
            ui.prompt = prompt;
        }
        if let Some(label) = self.ui.count_label {
            ui.count_label = label;
        }
        if let Some(hint) = self.ui.hint {
            ui.hint = hint;
        }

        Ok(ResolvedConfig {
            endpoint: EndpointConfig {
                base_url,
                page_size,
                timeout: Duration::from_secs(timeout_secs),
            },
            ui,
            theme: self.ui.theme,
            initial_term: self.ui.initial_gene.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = CliArgs::parse_from([
            "varview",
            "--endpoint",
            "https://example.org/variants/",
            "--page-size",
            "25",
            "--timeout",
            "30",
            "--theme",
            "light",
            "-g",
            "TP53",
        ]);

        let mut config = RawConfig::default();
        config.apply_cli_overrides(&cli);

        assert_eq!(config.endpoint.base_url, cli.endpoint);
        assert_eq!(config.endpoint.page_size, Some(25));
        assert_eq!(config.endpoint.timeout_secs, Some(30));
        assert_eq!(config.ui.theme.as_deref(), Some("light"));
        assert_eq!(config.ui.initial_gene.as_deref(), Some("TP53"));
    }

    #[test]
    fn defaults_resolve_to_the_service_contract() {
        let resolved = RawConfig::default().resolve().expect("resolves");
        assert_eq!(
            resolved.endpoint.base_url.as_str(),
            "http://localhost:8000/variants/"
        );
        assert_eq!(resolved.endpoint.page_size, 15);
        assert_eq!(resolved.endpoint.timeout, Duration::from_secs(10));
        assert!(resolved.theme.is_none());
        assert!(resolved.initial_term.is_empty());
    }

    #[test]
    fn malformed_base_urls_are_rejected() {
        let mut config = RawConfig::default();
        config.endpoint.base_url = Some("not a url".into());
        assert!(config.resolve().is_err());
    }

    #[test]
    fn non_http_schemes_are_rejected() {
        let mut config = RawConfig::default();
        config.endpoint.base_url = Some("ftp://example.org/variants/".into());
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = RawConfig::default();
        config.endpoint.page_size = Some(0);
        assert!(config.resolve().is_err());
    }

    #[test]
    fn unknown_themes_are_rejected() {
        let mut config = RawConfig::default();
        config.ui.theme = Some("neon".into());
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("unknown theme"));
    }

    #[test]
    fn ui_labels_flow_into_the_resolved_config() {
        let mut config = RawConfig::default();
        config.ui.prompt = Some("Filter".into());
        config.ui.count_label = Some("records".into());
        let resolved = config.resolve().expect("resolves");
        assert_eq!(resolved.ui.prompt, "Filter");
        assert_eq!(resolved.ui.count_label, "records");
    }
}
