use thiserror::Error;

use bookshelf_lib::{LookupError, SettingsError, StoreError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be resolved
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Nothing left to search for after trimming
    #[error("Search query is empty: give a title, or an ISBN with --isbn")]
    EmptyQuery,

    /// Catalog unreachable or returned something unusable
    #[error("Catalog lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// Collection file could not be read or written
    #[error("Collection error: {0}")]
    Store(#[from] StoreError),

    /// No record with the given id
    #[error("No book with id '{0}' in your collection")]
    UnknownBook(String),
}

impl CliError {
    pub(crate) fn unknown_book(id: impl Into<String>) -> Self {
        Self::UnknownBook(id.into())
    }
}
