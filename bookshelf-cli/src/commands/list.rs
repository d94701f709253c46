use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_lib::{ReadingStatus, Settings, filter_by_title};

use super::log_book;
use crate::CliError;

/// Show the collection, optionally narrowed by title and status.
pub(crate) fn run_list(
    data_file: Option<PathBuf>,
    filter: Option<String>,
    status: Option<ReadingStatus>,
) -> Result<(), CliError> {
    let settings = Settings::load(data_file)?;
    let books = settings.store().load_all()?;

    if books.is_empty() {
        log::info!(
            "{}",
            "Your collection is empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run 'bookshelf add <title>' or 'bookshelf add --isbn <isbn>' to add a book.");
        return Ok(());
    }

    let mut shown = filter_by_title(&books, filter.as_deref().unwrap_or(""));
    if let Some(status) = status {
        shown.retain(|b| b.status == status);
    }

    if shown.is_empty() {
        log::info!(
            "{}",
            "No books match.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log::info!(
        "{}",
        "My Library".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    for book in &shown {
        log_book(book);
        crate::log_blank();
    }
    log::info!("Showing {} of {} books", shown.len(), books.len());

    Ok(())
}

/// Show a single book.
pub(crate) fn run_show(data_file: Option<PathBuf>, id: &str) -> Result<(), CliError> {
    let settings = Settings::load(data_file)?;
    let book = settings
        .store()
        .get(id)?
        .ok_or_else(|| CliError::unknown_book(id))?;
    log_book(&book);
    Ok(())
}
