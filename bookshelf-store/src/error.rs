use std::path::PathBuf;

/// Errors that can occur while reading or writing the collection file.
///
/// Any of these on load means the file exists but cannot be trusted; it is
/// never treated as an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected columns in {path}: expected [{expected}], found [{found}]")]
    Schema {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Duplicate book id '{id}' in {path}")]
    DuplicateId { path: PathBuf, id: String },
}

impl StoreError {
    pub fn schema(path: impl Into<PathBuf>, expected: &[&str], found: &[&str]) -> Self {
        Self::Schema {
            path: path.into(),
            expected: expected.join(", "),
            found: found.join(", "),
        }
    }

    pub fn duplicate_id(path: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            path: path.into(),
            id: id.into(),
        }
    }
}
