use std::path::{Path, PathBuf};

use bookshelf_core::{BookRecord, ReadingStatus};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::table;

/// The user's collection, persisted as a CSV file.
///
/// Every call reads the whole file; every change rewrites the whole file.
/// There is no locking: one process at a time is assumed to own the file,
/// and concurrent writers can lose updates.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current table. A missing file is an empty collection; a
    /// file that exists but cannot be parsed is an error.
    pub fn load(&self) -> Result<Collection, StoreError> {
        let Some(records) = table::read_table(&self.path)? else {
            log::debug!("No collection at {}, starting empty", self.path.display());
            return Ok(Collection::new());
        };
        Collection::from_records(records).map_err(|id| StoreError::duplicate_id(&self.path, id))
    }

    /// All records in insertion order.
    pub fn load_all(&self) -> Result<Vec<BookRecord>, StoreError> {
        Ok(self.load()?.into_records())
    }

    pub fn get(&self, id: &str) -> Result<Option<BookRecord>, StoreError> {
        Ok(self.load()?.get(id).cloned())
    }

    /// Add `record` as `NotStarted` unless its id is already present.
    ///
    /// Returns false without touching the file when the id exists. The
    /// check runs against the table loaded by this call.
    pub fn insert(&self, record: BookRecord) -> Result<bool, StoreError> {
        let mut collection = self.load()?;
        let id = record.id.clone();
        if !collection.insert(record) {
            log::debug!("Book '{}' already in collection, not inserting", id);
            return Ok(false);
        }
        self.save(&collection)?;
        Ok(true)
    }

    /// Returns false without touching the file when no record has `id`.
    pub fn update_status(&self, id: &str, status: ReadingStatus) -> Result<bool, StoreError> {
        let mut collection = self.load()?;
        if !collection.set_status(id, status) {
            return Ok(false);
        }
        self.save(&collection)?;
        Ok(true)
    }

    /// Returns false without touching the file when no record has `id`.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut collection = self.load()?;
        if collection.remove(id).is_none() {
            return Ok(false);
        }
        self.save(&collection)?;
        Ok(true)
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        table::write_table(&self.path, collection.records())
    }
}
