use bookshelf_core::BookRecord;

/// Records whose title contains `needle`, ignoring case, in their original
/// order. An empty needle returns every record.
pub fn filter_by_title<'a>(records: &'a [BookRecord], needle: &str) -> Vec<&'a BookRecord> {
    records.iter().filter(|b| b.title_contains(needle)).collect()
}
