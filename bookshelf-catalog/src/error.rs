/// Errors that can occur while looking a book up in the catalog.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Search query is empty")]
    EmptyQuery,

    /// The catalog answered but had no matching volume.
    #[error("No matching book in the catalog")]
    NotFound,

    /// Transport failure. The request URL is stripped since it carries the
    /// API key.
    #[error("Catalog request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Catalog server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Unexpected catalog response: {0}")]
    Api(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl LookupError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// True when the catalog could not be reached or returned something
    /// unusable, as opposed to answering that no such book exists.
    pub fn is_lookup_failed(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::ServerError { .. } | Self::Api(_)
        )
    }
}
