//! Book metadata lookup against the Google Books volumes API.
//!
//! [`CatalogClient`] issues the request, [`types`] maps the JSON into typed
//! optional fields, and [`SearchResponse::first_record`] normalizes the first
//! match into a [`bookshelf_core::BookRecord`].

pub mod client;
pub mod error;
pub mod lookup;
pub mod types;

pub use client::{CatalogClient, CatalogConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::LookupError;
pub use lookup::{BookCatalog, normalize_isbn, search_term};
pub use types::{ImageLinks, SearchResponse, Volume, VolumeInfo};
