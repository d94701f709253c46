use std::time::Duration;

use crate::error::LookupError;
use crate::types::SearchResponse;

/// Google Books volumes search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Upper bound on a single catalog request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// How to reach the catalog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub timeout: Duration,
    /// Optional API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

/// Blocking HTTP client for the book catalog.
///
/// Issues exactly one request per search. Nothing is cached.
pub struct CatalogClient {
    http: reqwest::blocking::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("bookshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Run a raw search. `term` is sent verbatim as the `q` parameter
    /// (e.g. `"dune"` or `"isbn:9780441013593"`).
    pub fn search(&self, term: &str) -> Result<SearchResponse, LookupError> {
        let mut params = vec![("q", term.to_string())];
        if let Some(ref key) = self.config.api_key {
            params.push(("key", key.clone()));
        }

        log::debug!("GET {} q={}", self.config.endpoint, term);

        let resp = self
            .http
            .get(&self.config.endpoint)
            .query(&params)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            return Err(LookupError::ServerError {
                status: status.as_u16(),
                message: excerpt(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            LookupError::api(format!(
                "Failed to parse search response: {e}. Response: {}",
                excerpt(&text)
            ))
        })
    }
}

/// First 200 characters of a response body, for error messages.
fn excerpt(text: &str) -> String {
    text.chars().take(200).collect()
}
