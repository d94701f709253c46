//! Book collection data model shared by every bookshelf crate.
//!
//! Defines [`BookRecord`], the [`ReadingStatus`] a user assigns to it, and the
//! placeholder values used when the catalog omits a field.

pub mod record;
pub mod status;

pub use record::{ANONYMOUS, BookRecord, PLACEHOLDER_COVER_URL, UNTITLED};
pub use status::{ReadingStatus, StatusParseError};
