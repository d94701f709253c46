//! Typed view of the volumes search response.
//!
//! Only the fields the collection needs are modelled. Everything is optional
//! because the catalog omits keys freely; defaults are applied when the first
//! match is turned into a [`BookRecord`].

use bookshelf_core::{ANONYMOUS, BookRecord, PLACEHOLDER_COVER_URL, UNTITLED};
use serde::Deserialize;

use crate::error::LookupError;

/// Top-level response from the volumes search endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Some responses carry an identifier next to `items`; used only when the
    /// matched item has none of its own.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub total_items: Option<u64>,
    /// Absent (not empty) when nothing matched.
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

/// One search hit.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl SearchResponse {
    /// Normalize the first match into a record. Later matches are ignored.
    pub fn first_record(self) -> Result<BookRecord, LookupError> {
        let first = self
            .items
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(LookupError::NotFound)?;

        let id = non_blank(first.id)
            .or_else(|| non_blank(self.id))
            .ok_or_else(|| LookupError::api("catalog match has no identifier"))?;

        Ok(first.volume_info.into_record(id))
    }
}

impl VolumeInfo {
    /// Build a fully-populated record, substituting placeholders for
    /// anything missing or blank.
    pub fn into_record(self, id: String) -> BookRecord {
        let title = non_blank(self.title).unwrap_or_else(|| UNTITLED.to_string());

        let authors: Vec<String> = self
            .authors
            .unwrap_or_default()
            .into_iter()
            .filter(|a| !a.trim().is_empty())
            .collect();
        let author = if authors.is_empty() {
            ANONYMOUS.to_string()
        } else {
            authors.join(", ")
        };

        let cover_url = non_blank(self.image_links.and_then(|links| links.thumbnail))
            .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string());

        BookRecord::new(id, title, author, cover_url)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
