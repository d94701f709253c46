//! Application layer for bookshelf: settings resolution and the flows that
//! connect the catalog to the collection store.

pub mod add;
pub mod barcode;
pub mod error;
pub mod settings;

pub use add::{AddOutcome, BookQuery, find_book, save_book};
pub use barcode::{BarcodeDecoder, scan_and_find};
pub use error::{ScanError, SettingsError};
pub use settings::{
    Setting, SettingSource, Settings, SettingsFile, default_data_file, load_settings_file,
    save_data_file, settings_path,
};

pub use bookshelf_catalog::{BookCatalog, CatalogClient, CatalogConfig, LookupError};
pub use bookshelf_core::{BookRecord, ReadingStatus};
pub use bookshelf_store::{CollectionStore, StoreError, filter_by_title};
