use bookshelf_core::BookRecord;

use crate::client::CatalogClient;
use crate::error::LookupError;

/// Something that can turn a title or ISBN into a single book.
///
/// Implemented by [`CatalogClient`]; callers that only need lookups take
/// `&dyn BookCatalog` so they can be exercised without a network.
pub trait BookCatalog {
    /// Find the first catalog match for `query`.
    ///
    /// With `is_isbn` the query is scoped to an exact ISBN search, otherwise
    /// it is a free-text search. Returns [`LookupError::NotFound`] when the
    /// catalog has no match.
    fn lookup(&self, query: &str, is_isbn: bool) -> Result<BookRecord, LookupError>;
}

impl BookCatalog for CatalogClient {
    fn lookup(&self, query: &str, is_isbn: bool) -> Result<BookRecord, LookupError> {
        let term = search_term(query, is_isbn)?;
        let book = self.search(&term)?.first_record()?;
        log::debug!("Catalog match for '{}': {} ({})", term, book.title, book.id);
        Ok(book)
    }
}

/// Build the `q` parameter for a search.
pub fn search_term(query: &str, is_isbn: bool) -> Result<String, LookupError> {
    if is_isbn {
        let isbn = normalize_isbn(query);
        if isbn.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(format!("isbn:{isbn}"))
    } else {
        let text = query.trim();
        if text.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(text.to_string())
    }
}

/// Strip the separators people type or scanners emit inside an ISBN.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_term_is_scoped() {
        assert_eq!(
            search_term("9780441013593", true).unwrap(),
            "isbn:9780441013593"
        );
    }

    #[test]
    fn test_isbn_separators_removed() {
        assert_eq!(normalize_isbn("978-0-441-01359-3"), "9780441013593");
        assert_eq!(normalize_isbn(" 978 0441013593\n"), "9780441013593");
        assert_eq!(normalize_isbn("0-8044-2957-X"), "080442957X");
    }

    #[test]
    fn test_title_term_is_trimmed_verbatim() {
        assert_eq!(search_term("  Harry Potter ", false).unwrap(), "Harry Potter");
    }

    #[test]
    fn test_empty_queries_rejected() {
        assert!(matches!(search_term("", false), Err(LookupError::EmptyQuery)));
        assert!(matches!(search_term("   ", false), Err(LookupError::EmptyQuery)));
        assert!(matches!(search_term(" - ", true), Err(LookupError::EmptyQuery)));
    }

    #[test]
    fn test_empty_query_is_not_a_lookup_failure() {
        assert!(!LookupError::EmptyQuery.is_lookup_failed());
        assert!(!LookupError::NotFound.is_lookup_failed());
    }
}
