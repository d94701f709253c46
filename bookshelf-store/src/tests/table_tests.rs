use super::*;
use bookshelf_core::ReadingStatus;

fn parse(content: &str) -> Result<Vec<BookRecord>, StoreError> {
    parse_table(content.as_bytes(), Path::new("books.csv"))
}

#[test]
fn parses_rows_in_order() {
    let books = parse(
        "ID,Title,Author,Cover,Status\n\
         abc1,Dune,Frank Herbert,https://via.placeholder.com/150,Not Started\n\
         hp1,Harry Potter,J. K. Rowling,http://books.google.com/thumb,Finished\n",
    )
    .unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, "abc1");
    assert_eq!(books[0].status, ReadingStatus::NotStarted);
    assert_eq!(books[1].title, "Harry Potter");
    assert_eq!(books[1].status, ReadingStatus::Finished);
}

#[test]
fn header_only_is_empty_collection() {
    let books = parse("ID,Title,Author,Cover,Status\n").unwrap();
    assert!(books.is_empty());
}

#[test]
fn quoted_fields_are_unescaped() {
    let books = parse(
        "ID,Title,Author,Cover,Status\n\
         g1,\"Good Omens: The Nice and Accurate Prophecies of Agnes Nutter, Witch\",\"Terry Pratchett, Neil Gaiman\",x,In Progress\n",
    )
    .unwrap();
    assert_eq!(
        books[0].title,
        "Good Omens: The Nice and Accurate Prophecies of Agnes Nutter, Witch"
    );
    assert_eq!(books[0].author, "Terry Pratchett, Neil Gaiman");
}

#[test]
fn empty_content_is_a_schema_error() {
    assert!(matches!(parse(""), Err(StoreError::Schema { .. })));
}

#[test]
fn wrong_header_is_a_schema_error() {
    let err = parse("ID,Judul,Penulis,Cover,Status\n").unwrap_err();
    match err {
        StoreError::Schema { expected, found, .. } => {
            assert_eq!(expected, "ID, Title, Author, Cover, Status");
            assert_eq!(found, "ID, Judul, Penulis, Cover, Status");
        }
        other => panic!("expected Schema, got {other:?}"),
    }
}

#[test]
fn reordered_header_is_a_schema_error() {
    assert!(matches!(
        parse("Title,ID,Author,Cover,Status\n"),
        Err(StoreError::Schema { .. })
    ));
}

#[test]
fn short_row_is_rejected() {
    let err = parse("ID,Title,Author,Cover,Status\nabc1,Dune,Frank Herbert\n").unwrap_err();
    assert!(matches!(err, StoreError::Csv(_)));
}

#[test]
fn unknown_status_is_rejected() {
    let err = parse("ID,Title,Author,Cover,Status\nabc1,Dune,Frank Herbert,x,Belum Dibaca\n")
        .unwrap_err();
    assert!(matches!(err, StoreError::Csv(_)));
}

#[test]
fn failed_replace_removes_temp_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("books.csv");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();

    assert!(write_table(&path, &[]).is_err());
    assert!(!path.with_extension("csv.tmp").exists());
    assert!(path.join("keep").exists());
}
