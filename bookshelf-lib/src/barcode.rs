//! Seam for an external barcode decoder.

use bookshelf_catalog::BookCatalog;
use bookshelf_core::BookRecord;

use crate::add::{BookQuery, find_book};
use crate::error::ScanError;

/// Decodes barcodes from an image.
///
/// Implementations wrap whatever decoding library or tool is available.
/// Returns every decoded payload; an empty vec means nothing was found.
pub trait BarcodeDecoder {
    fn decode(&self, image: &[u8]) -> Vec<Vec<u8>>;
}

/// Decode `image`, read the first barcode as an ISBN, and look it up.
pub fn scan_and_find(
    decoder: &dyn BarcodeDecoder,
    catalog: &dyn BookCatalog,
    image: &[u8],
) -> Result<BookRecord, ScanError> {
    let decoded = decoder.decode(image);
    let query = BookQuery::from_barcodes(&decoded).ok_or(ScanError::NoBarcode)?;
    log::info!("Barcode found: {}", query.text());
    Ok(find_book(catalog, &query)?)
}
