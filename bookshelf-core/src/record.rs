use serde::{Deserialize, Serialize};

use crate::status::ReadingStatus;

/// Title used when the catalog entry has none.
pub const UNTITLED: &str = "Untitled";

/// Author used when the catalog entry lists no authors.
pub const ANONYMOUS: &str = "Anonymous";

/// Cover image used when the catalog entry has no thumbnail.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150";

/// One book in the user's collection.
///
/// Serde names match the columns of the collection file
/// (`ID,Title,Author,Cover,Status`), and field order matches column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Catalog-assigned identifier. Unique within a collection.
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Title")]
    pub title: String,

    /// All authors joined with `", "`.
    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Cover")]
    pub cover_url: String,

    #[serde(rename = "Status")]
    pub status: ReadingStatus,
}

impl BookRecord {
    /// Create a record with the default [`ReadingStatus::NotStarted`] status.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        cover_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            cover_url: cover_url.into(),
            status: ReadingStatus::NotStarted,
        }
    }

    pub fn with_status(mut self, status: ReadingStatus) -> Self {
        self.status = status;
        self
    }

    /// True if the title contains `needle`, ignoring case.
    /// An empty needle matches every record.
    pub fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}
