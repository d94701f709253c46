//! CSV-backed persistence for the book collection.
//!
//! [`CollectionStore`] owns the file and enforces one record per id;
//! [`filter_by_title`] narrows a loaded list for display.

pub mod collection;
pub mod error;
pub mod filter;
pub mod store;
pub mod table;

pub use collection::Collection;
pub use error::StoreError;
pub use filter::filter_by_title;
pub use store::CollectionStore;
pub use table::COLUMNS;
