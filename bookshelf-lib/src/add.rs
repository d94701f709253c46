//! The add-book flow: query the catalog, then save the match.

use bookshelf_catalog::{BookCatalog, LookupError};
use bookshelf_core::BookRecord;
use bookshelf_store::{CollectionStore, StoreError};

/// What the user asked to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookQuery {
    /// Free-text title search.
    Title(String),
    /// Exact ISBN search (typed or scanned).
    Isbn(String),
}

impl BookQuery {
    /// Build a query from barcode decoder output.
    ///
    /// Only the first decoded payload is used, read as an ISBN. Returns
    /// `None` if nothing was decoded or the first payload is blank.
    pub fn from_barcodes(decoded: &[Vec<u8>]) -> Option<Self> {
        let first = decoded.first()?;
        let isbn = String::from_utf8_lossy(first).trim().to_string();
        if isbn.is_empty() {
            None
        } else {
            Some(Self::Isbn(isbn))
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Title(t) | Self::Isbn(t) => t,
        }
    }

    pub fn is_isbn(&self) -> bool {
        matches!(self, Self::Isbn(_))
    }
}

impl std::fmt::Display for BookQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title(t) => write!(f, "title \"{}\"", t),
            Self::Isbn(isbn) => write!(f, "ISBN {}", isbn),
        }
    }
}

/// Result of trying to save a looked-up book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A record with the same id was already in the collection.
    Duplicate,
}

/// Look the query up in the catalog. Takes the catalog's first match.
pub fn find_book(catalog: &dyn BookCatalog, query: &BookQuery) -> Result<BookRecord, LookupError> {
    log::debug!("Looking up {}", query);
    catalog.lookup(query.text(), query.is_isbn())
}

/// Save a looked-up book. A duplicate id is an outcome, not an error.
pub fn save_book(store: &CollectionStore, book: &BookRecord) -> Result<AddOutcome, StoreError> {
    if store.insert(book.clone())? {
        log::debug!("Added '{}' ({}) to {}", book.title, book.id, store.path().display());
        Ok(AddOutcome::Added)
    } else {
        log::debug!("'{}' ({}) is already in the collection", book.title, book.id);
        Ok(AddOutcome::Duplicate)
    }
}
