//! CSV encoding of the collection file.
//!
//! Layout: a header row `ID,Title,Author,Cover,Status` followed by one row
//! per book. Quoting follows standard CSV rules, so titles and author lists
//! containing commas or quotes survive a round trip.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use bookshelf_core::BookRecord;

use crate::error::StoreError;

/// Column names, in file order.
pub const COLUMNS: &[&str] = &["ID", "Title", "Author", "Cover", "Status"];

/// Read every row from `path`. Returns `None` if the file does not exist.
pub fn read_table(path: &Path) -> Result<Option<Vec<BookRecord>>, StoreError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    parse_table(file, path).map(Some)
}

/// Parse CSV content. `path` is only used in error messages.
pub fn parse_table<R: Read>(input: R, path: &Path) -> Result<Vec<BookRecord>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let found: Vec<&str> = headers.iter().collect();
    if found != COLUMNS {
        return Err(StoreError::schema(path, COLUMNS, &found));
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<BookRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Replace the file at `path` with exactly `records`.
///
/// Writes a sibling `.tmp` file and renames it into place, so readers see
/// either the old table or the new one in full.
pub fn write_table(path: &Path, records: &[BookRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("csv.tmp");
    let written = write_rows(&tmp, records).and_then(|()| Ok(fs::rename(&tmp, path)?));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    log::debug!("Wrote {} book(s) to {}", records.len(), path.display());
    Ok(())
}

fn write_rows(tmp: &Path, records: &[BookRecord]) -> Result<(), StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(tmp)?;
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
