#[path = "../../bookshelf-catalog/tests/common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::time::Duration;

use bookshelf_lib::{
    AddOutcome, BarcodeDecoder, BookCatalog, BookQuery, BookRecord, CatalogClient, CatalogConfig,
    CollectionStore, LookupError, ReadingStatus, ScanError, find_book, save_book, scan_and_find,
};
use bookshelf_core::PLACEHOLDER_COVER_URL;
use common::CatalogStub;
use tempfile::TempDir;

/// Catalog double that records queries and answers from a fixed result.
struct FakeCatalog {
    answer: fn() -> Result<BookRecord, LookupError>,
    calls: RefCell<Vec<(String, bool)>>,
}

impl FakeCatalog {
    fn new(answer: fn() -> Result<BookRecord, LookupError>) -> Self {
        Self {
            answer,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl BookCatalog for FakeCatalog {
    fn lookup(&self, query: &str, is_isbn: bool) -> Result<BookRecord, LookupError> {
        self.calls.borrow_mut().push((query.to_string(), is_isbn));
        (self.answer)()
    }
}

fn dune() -> Result<BookRecord, LookupError> {
    Ok(BookRecord::new("abc1", "Dune", "Frank Herbert", PLACEHOLDER_COVER_URL))
}

fn not_found() -> Result<BookRecord, LookupError> {
    Err(LookupError::NotFound)
}

fn unreachable_catalog() -> Result<BookRecord, LookupError> {
    Err(LookupError::api("connection refused"))
}

struct FixedDecoder(Vec<Vec<u8>>);

impl BarcodeDecoder for FixedDecoder {
    fn decode(&self, _image: &[u8]) -> Vec<Vec<u8>> {
        self.0.clone()
    }
}

#[test]
fn isbn_scan_end_to_end() {
    let stub = CatalogStub::spawn(
        200,
        r#"{"id":"abc1","items":[{"volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}}]}"#,
    );
    let catalog = CatalogClient::new(CatalogConfig {
        endpoint: stub.endpoint.clone(),
        timeout: Duration::from_secs(5),
        api_key: None,
    })
    .unwrap();
    let tmp = TempDir::new().unwrap();
    let store = CollectionStore::new(tmp.path().join("books_data.csv"));

    let book = find_book(&catalog, &BookQuery::Isbn("9780441013593".to_string())).unwrap();
    assert_eq!(save_book(&store, &book).unwrap(), AddOutcome::Added);
    assert_eq!(stub.queries(), vec!["q=isbn%3A9780441013593".to_string()]);

    let books = store.load_all().unwrap();
    assert_eq!(
        books,
        vec![BookRecord {
            id: "abc1".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            cover_url: PLACEHOLDER_COVER_URL.to_string(),
            status: ReadingStatus::NotStarted,
        }]
    );
}

#[test]
fn saving_twice_is_a_duplicate() {
    let catalog = FakeCatalog::new(dune);
    let tmp = TempDir::new().unwrap();
    let store = CollectionStore::new(tmp.path().join("books.csv"));
    let query = BookQuery::Title("dune".to_string());

    let book = find_book(&catalog, &query).unwrap();
    assert_eq!(save_book(&store, &book).unwrap(), AddOutcome::Added);
    let book = find_book(&catalog, &query).unwrap();
    assert_eq!(save_book(&store, &book).unwrap(), AddOutcome::Duplicate);

    assert_eq!(store.load_all().unwrap().len(), 1);
    assert_eq!(
        *catalog.calls.borrow(),
        vec![("dune".to_string(), false), ("dune".to_string(), false)]
    );
}

#[test]
fn failed_lookup_leaves_store_untouched() {
    let catalog = FakeCatalog::new(unreachable_catalog);
    let tmp = TempDir::new().unwrap();
    let store = CollectionStore::new(tmp.path().join("books.csv"));

    let err = find_book(&catalog, &BookQuery::Title("dune".to_string())).unwrap_err();
    assert!(err.is_lookup_failed());
    assert!(!store.path().exists());
}

#[test]
fn scan_uses_first_barcode_as_isbn() {
    let catalog = FakeCatalog::new(dune);
    let decoder = FixedDecoder(vec![b"9780441013593".to_vec(), b"5012345678900".to_vec()]);

    let book = scan_and_find(&decoder, &catalog, b"fake image").unwrap();
    assert_eq!(book.id, "abc1");
    assert_eq!(
        *catalog.calls.borrow(),
        vec![("9780441013593".to_string(), true)]
    );
}

#[test]
fn scan_without_barcode_skips_catalog() {
    let catalog = FakeCatalog::new(dune);
    let decoder = FixedDecoder(Vec::new());

    let err = scan_and_find(&decoder, &catalog, b"blurry").unwrap_err();
    assert!(matches!(err, ScanError::NoBarcode));
    assert!(catalog.calls.borrow().is_empty());
}

#[test]
fn scan_not_found_is_reported() {
    let catalog = FakeCatalog::new(not_found);
    let decoder = FixedDecoder(vec![b"0000000000".to_vec()]);

    let err = scan_and_find(&decoder, &catalog, b"img").unwrap_err();
    assert!(matches!(err, ScanError::Lookup(LookupError::NotFound)));
}
