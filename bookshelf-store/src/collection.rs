use bookshelf_core::{BookRecord, ReadingStatus};

/// In-memory copy of the collection table, in insertion order.
///
/// Holds at most one record per id. [`crate::CollectionStore`] loads one of
/// these, applies a single change, and writes it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    books: Vec<BookRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows in file order. Returns the first repeated id on failure.
    pub fn from_records(records: Vec<BookRecord>) -> Result<Self, String> {
        let mut collection = Self::new();
        for record in records {
            if collection.contains(&record.id) {
                return Err(record.id);
            }
            collection.books.push(record);
        }
        Ok(collection)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.books.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Append `record` with status reset to `NotStarted`.
    /// Returns false, leaving the collection untouched, if the id is taken.
    pub fn insert(&mut self, record: BookRecord) -> bool {
        if self.contains(&record.id) {
            return false;
        }
        self.books.push(record.with_status(ReadingStatus::NotStarted));
        true
    }

    /// Returns false if no record has `id`.
    pub fn set_status(&mut self, id: &str, status: ReadingStatus) -> bool {
        match self.books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.status = status;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<BookRecord> {
        let pos = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn into_records(self) -> Vec<BookRecord> {
        self.books
    }
}
