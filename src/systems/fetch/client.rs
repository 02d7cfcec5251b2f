use std::time::Duration;

use anyhow::Context;
use thiserror::Error;
use url::Url;

use crate::query::SearchQuery;
use crate::records::VariantPage;

/// Endpoint queried when no configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/variants/";
/// Records per page the service returns and the pager assumes.
pub const DEFAULT_PAGE_SIZE: u32 = 15;
/// Per-request timeout applied to the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the variant service.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub base_url: Url,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default endpoint URL must parse"),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Ways a single fetch can fail.
///
/// A stale response is not a failure; staleness is a discard condition the
/// caller decides by request id, before it ever inspects the outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },
    /// The service answered with a non-success status code.
    #[error("server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    /// The response body was not a results page.
    #[error("could not decode results page: {message}")]
    Payload { message: String },
}

/// Capability the fetch worker consumes: run one search, produce one page.
///
/// Implementations execute on the worker thread and are free to block.
pub trait VariantSource: Send + 'static {
    fn search(&self, query: &SearchQuery) -> Result<VariantPage, FetchError>;
}

/// Production source speaking the variant service's HTTP contract:
/// `GET {base_url}?page={n}&search={term}`, where `search` is omitted for an
/// empty term.
pub struct HttpVariantSource {
    client: reqwest::blocking::Client,
    base_url: Url,
}

impl HttpVariantSource {
    /// Build a source with a bounded per-request timeout.
    pub fn new(endpoint: &EndpointConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(endpoint.timeout)
            .build()
            .context("failed to construct HTTP client")?;
        Ok(Self {
            client,
            base_url: endpoint.base_url.clone(),
        })
    }

    fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page().to_string());
            if let Some(term) = query.normalized_term() {
                pairs.append_pair("search", term);
            }
        }
        url
    }
}

impl VariantSource for HttpVariantSource {
    fn search(&self, query: &SearchQuery) -> Result<VariantPage, FetchError> {
        let url = self.request_url(query);
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|err| classify_send_error(&url, &err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().map_err(|err| classify_send_error(&url, &err))?;
        serde_json::from_str(&body).map_err(|err| FetchError::Payload {
            message: err.to_string(),
        })
    }
}

fn classify_send_error(url: &Url, err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
